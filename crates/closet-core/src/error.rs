//! Domain Errors
//!
//! One error enum for every fallible marketplace operation.

use thiserror::Error;

use crate::model::ItemId;

#[derive(Error, Debug)]
pub enum ClosetError {
    /// Email rejected by the session gate (carries the user-facing message)
    #[error("{0}")]
    AccessRestricted(String),

    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("No rental for item {0}")]
    RentalNotFound(ItemId),

    #[error("Item {0} was already collected")]
    AlreadyCollected(ItemId),

    /// Stored catalog already holds the largest possible ID
    #[error("No item ID left after {0}")]
    IdsExhausted(ItemId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Locker error: {0}")]
    Locker(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ClosetError>;

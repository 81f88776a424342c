//! CampusCloset Domain Layer
//!
//! Platform-independent marketplace logic:
//! - model: Items, categories, conditions
//! - catalog: Item list with load/persist through a key-value store
//! - filter / pricing / listing / rentals / session / seller: decision logic
//! - marketplace: the single controller that owns all state

mod catalog;
mod config;
mod entity;
mod error;
mod filter;
mod listing;
mod marketplace;
mod model;
mod pricing;
mod rentals;
mod seed;
mod seller;
mod session;
mod storage;


pub use catalog::Catalog;
pub use config::{ClosetConfig, Collection, FeeSchedule, SellerIdentity};
pub use entity::Entity;
pub use error::{ClosetError, Result};
pub use filter::{filter_items, CategoryFilter, FilterState, ViewMode};
pub use listing::{deposit_for, ImageUploader, ListingDraft, StockImageUploader, ValidListing};
pub use marketplace::{Action, Marketplace, Outcome, Services};
pub use model::{Category, Condition, Item, ItemId};
pub use pricing::{quote, Quote};
pub use rentals::{LockerActuator, PickupStatus, RentalEntry, RentalTracker, SimulatedLocker};
pub use seed::seed_items;
pub use seller::{SellerProfile, SellerReview};
pub use session::{Session, SessionGate, ACCESS_RESTRICTED};
pub use storage::{KeyValueStore, MemoryStore};

//! Core Entity Trait
//!
//! Every record the marketplace tracks by identity (catalog items, rental
//! entries) implements this.

/// Core trait for identifiable domain records
pub trait Entity: Sized + Clone {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}

/// Find a record by ID in a slice
pub fn find_by_id<T: Entity>(records: &[T], id: T::Id) -> Option<&T> {
    records.iter().find(|r| r.id() == id)
}

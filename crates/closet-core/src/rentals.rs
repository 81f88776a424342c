//! Rental Lifecycle Tracker
//!
//! One entry per acquired item:
//! `ReadyForPickup` (in the locker) -> `Collected` (scanned out). Terminal;
//! there is no return flow.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::entity::{find_by_id, Entity};
use crate::error::{ClosetError, Result};
use crate::filter::ViewMode;
use crate::model::{Item, ItemId};

/// How long a pickup code is shown as valid
const CODE_VALIDITY_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    ReadyForPickup,
    Collected,
}

impl PickupStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PickupStatus::ReadyForPickup => "Ready for Pickup",
            PickupStatus::Collected => "Collected",
        }
    }
}

/// Physical lock release. Stands in for the locker hardware service.
pub trait LockerActuator {
    fn release(&mut self, entry: &RentalEntry) -> Result<()>;
}

/// Locker that opens on every scan
#[derive(Debug, Clone, Default)]
pub struct SimulatedLocker {
    released: Vec<ItemId>,
}

impl SimulatedLocker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items released so far, in scan order
    pub fn released(&self) -> &[ItemId] {
        &self.released
    }
}

impl LockerActuator for SimulatedLocker {
    fn release(&mut self, entry: &RentalEntry) -> Result<()> {
        log::info!("[LOCKER] Released compartment {} for item {}", entry.pickup_code, entry.item.id);
        self.released.push(entry.item.id);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalEntry {
    pub item: Item,
    /// Rented or bought
    pub mode: ViewMode,
    pub status: PickupStatus,
    pub reserved_at: DateTime<Utc>,
    pub collected_at: Option<DateTime<Utc>>,
    /// Display-only code, not a real credential
    pub pickup_code: String,
}

impl RentalEntry {
    fn new(item: Item, mode: ViewMode, now: DateTime<Utc>) -> Self {
        let pickup_code = pickup_code_for(item.id);
        Self {
            item,
            mode,
            status: PickupStatus::ReadyForPickup,
            reserved_at: now,
            collected_at: None,
            pickup_code,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == PickupStatus::ReadyForPickup
    }

    pub fn code_expires_at(&self) -> DateTime<Utc> {
        self.reserved_at + Duration::hours(CODE_VALIDITY_HOURS)
    }
}

impl Entity for RentalEntry {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.item.id
    }
}

/// Four base-36 characters derived from the item ID, e.g. "#8X29"
fn pickup_code_for(id: ItemId) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut n = id.0.wrapping_mul(2_654_435_761) % 36u64.pow(4);
    let mut code = [b'0'; 4];
    for slot in code.iter_mut().rev() {
        *slot = ALPHABET[(n % 36) as usize];
        n /= 36;
    }
    format!("#{}", String::from_utf8_lossy(&code))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentalTracker {
    entries: Vec<RentalEntry>,
}

impl RentalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RentalEntry] {
        &self.entries
    }

    pub fn get(&self, id: ItemId) -> Option<&RentalEntry> {
        find_by_id(&self.entries, id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries still waiting in a locker
    pub fn ready_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_ready()).count()
    }

    /// Completed pickups
    pub fn history_count(&self) -> usize {
        self.entries.len() - self.ready_count()
    }

    /// Place an acquired item in a locker. An item already tracked keeps
    /// its existing entry.
    pub fn check_in(&mut self, item: Item, mode: ViewMode, now: DateTime<Utc>) -> &RentalEntry {
        let id = item.id;
        if let Some(pos) = self.entries.iter().position(|e| e.id() == id) {
            log::debug!("[RENTALS] Item {} already tracked", id);
            return &self.entries[pos];
        }
        log::info!("[RENTALS] Item {} ready for pickup ({})", id, mode.as_str());
        self.entries.push(RentalEntry::new(item, mode, now));
        &self.entries[self.entries.len() - 1]
    }

    /// Simulated scan: release the locker and mark the entry collected.
    /// Nothing changes if the locker refuses.
    pub fn collect(
        &mut self,
        id: ItemId,
        locker: &mut dyn LockerActuator,
        now: DateTime<Utc>,
    ) -> Result<&RentalEntry> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or(ClosetError::RentalNotFound(id))?;

        if entry.status == PickupStatus::Collected {
            return Err(ClosetError::AlreadyCollected(id));
        }

        locker.release(entry)?;
        entry.status = PickupStatus::Collected;
        entry.collected_at = Some(now);
        log::info!("[RENTALS] Item {} collected", id);
        Ok(&*entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_items;

    struct JammedLocker;

    impl LockerActuator for JammedLocker {
        fn release(&mut self, _entry: &RentalEntry) -> Result<()> {
            Err(ClosetError::Locker("door jammed".into()))
        }
    }

    fn tracker_with_two() -> RentalTracker {
        let items = seed_items();
        let mut tracker = RentalTracker::new();
        tracker.check_in(items[0].clone(), ViewMode::Rent, Utc::now());
        tracker.check_in(items[1].clone(), ViewMode::Buy, Utc::now());
        tracker
    }

    #[test]
    fn test_check_in_starts_ready() {
        let tracker = tracker_with_two();
        let entry = tracker.get(ItemId(1)).unwrap();
        assert_eq!(entry.status, PickupStatus::ReadyForPickup);
        assert!(entry.collected_at.is_none());
        assert_eq!(entry.code_expires_at() - entry.reserved_at, Duration::hours(24));
        assert_eq!(tracker.ready_count(), 2);
        assert_eq!(tracker.history_count(), 0);
    }

    #[test]
    fn test_collect_once() {
        let mut tracker = tracker_with_two();
        let mut locker = SimulatedLocker::new();

        let entry = tracker.collect(ItemId(1), &mut locker, Utc::now()).unwrap();
        assert_eq!(entry.status, PickupStatus::Collected);
        assert!(entry.collected_at.is_some());

        let again = tracker.collect(ItemId(1), &mut locker, Utc::now());
        assert!(matches!(again, Err(ClosetError::AlreadyCollected(ItemId(1)))));
        assert_eq!(tracker.get(ItemId(1)).unwrap().status, PickupStatus::Collected);
        assert_eq!(locker.released(), &[ItemId(1)]);
    }

    #[test]
    fn test_collect_is_per_item() {
        let mut tracker = tracker_with_two();
        tracker.collect(ItemId(2), &mut SimulatedLocker::new(), Utc::now()).unwrap();
        assert_eq!(tracker.get(ItemId(1)).unwrap().status, PickupStatus::ReadyForPickup);
        assert_eq!(tracker.history_count(), 1);
    }

    #[test]
    fn test_collect_unknown() {
        let mut tracker = tracker_with_two();
        let result = tracker.collect(ItemId(404), &mut SimulatedLocker::new(), Utc::now());
        assert!(matches!(result, Err(ClosetError::RentalNotFound(ItemId(404)))));
    }

    #[test]
    fn test_jammed_locker_leaves_entry_ready() {
        let mut tracker = tracker_with_two();
        let result = tracker.collect(ItemId(1), &mut JammedLocker, Utc::now());
        assert!(matches!(result, Err(ClosetError::Locker(_))));
        assert!(tracker.get(ItemId(1)).unwrap().is_ready());
    }

    #[test]
    fn test_duplicate_check_in_keeps_entry() {
        let mut tracker = tracker_with_two();
        tracker.collect(ItemId(1), &mut SimulatedLocker::new(), Utc::now()).unwrap();
        let entry = tracker.check_in(seed_items()[0].clone(), ViewMode::Rent, Utc::now());
        assert_eq!(entry.status, PickupStatus::Collected);
        assert_eq!(tracker.entries().len(), 2);
    }

    #[test]
    fn test_pickup_code_shape() {
        let code = pickup_code_for(ItemId(1_700_000_000_000));
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('#'));
        assert_eq!(code, pickup_code_for(ItemId(1_700_000_000_000)));
    }
}

//! Generic slot-backed record list.
//!
//! # Responsibility
//! - Own one widget's in-memory record list.
//! - Serialize and write the whole list to its slot after every mutation.
//!
//! # Invariants
//! - One mutation results in exactly one full-collection write (no deltas,
//!   no debouncing). Out-of-range swaps are no-ops and do not write.
//! - A failed write leaves in-memory state untouched.
//! - Loading never fails: absent, unreadable or unparseable slots yield an
//!   empty list.

use crate::model::record::Record;
use crate::storage::{SlotStorage, StorageError};
use crate::store::reorder::{adjacent_target, MoveDirection};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while persisting a record list.
#[derive(Debug)]
pub enum StoreError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize records: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Reads and decodes the record list stored in `slot`.
///
/// Never fails; problems are logged and mapped to an empty list.
pub fn load<T: DeserializeOwned>(storage: &impl SlotStorage, slot: &str) -> Vec<T> {
    match storage.read_slot(slot) {
        Ok(Some(raw)) => decode_or_empty(slot, &raw),
        Ok(None) => {
            debug!("event=slot_load module=store status=absent slot={slot}");
            Vec::new()
        }
        Err(err) => {
            warn!(
                "event=slot_load module=store status=error slot={slot} error_code=slot_read_failed error={err}"
            );
            Vec::new()
        }
    }
}

/// Serializes `records` and overwrites `slot` with the result.
pub fn save<T: Serialize>(
    storage: &impl SlotStorage,
    slot: &str,
    records: &[T],
) -> StoreResult<()> {
    let encoded = serde_json::to_string(records)?;
    if let Err(err) = storage.write_slot(slot, &encoded) {
        warn!(
            "event=slot_write module=store status=error slot={slot} error_code=slot_write_failed error={err}"
        );
        return Err(err.into());
    }
    debug!(
        "event=slot_write module=store status=ok slot={slot} records={}",
        records.len()
    );
    Ok(())
}

fn decode_or_empty<T: DeserializeOwned>(slot: &str, raw: &str) -> Vec<T> {
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(records) => {
            debug!(
                "event=slot_load module=store status=ok slot={slot} records={}",
                records.len()
            );
            records
        }
        Err(err) => {
            // serde_json errors carry only position info, never slot content.
            warn!(
                "event=slot_load module=store status=malformed slot={slot} error_code=slot_parse_failed error={err}"
            );
            Vec::new()
        }
    }
}

/// Ordered record list bound to one persistent slot.
pub struct RecordStore<T, S> {
    storage: S,
    slot: String,
    records: Vec<T>,
}

impl<T, S> RecordStore<T, S>
where
    T: Record + Clone + Serialize + DeserializeOwned,
    S: SlotStorage,
{
    /// Loads `slot` from `storage`, starting empty when nothing usable is stored.
    pub fn open(storage: S, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let records = load(&storage, &slot);
        Self {
            storage,
            slot,
            records,
        }
    }

    /// Like [`RecordStore::open`], but a slot that was never written starts
    /// from `defaults` and persists them immediately.
    ///
    /// A present-but-malformed slot still starts empty.
    pub fn open_or_seed(
        storage: S,
        slot: impl Into<String>,
        defaults: impl FnOnce() -> Vec<T>,
    ) -> StoreResult<Self> {
        let slot = slot.into();
        let seeded = matches!(storage.read_slot(&slot), Ok(None));
        if !seeded {
            return Ok(Self::open(storage, slot));
        }

        let mut store = Self {
            storage,
            slot,
            records: Vec::new(),
        };
        store.commit(defaults())?;
        debug!(
            "event=slot_seed module=store status=ok slot={} records={}",
            store.slot,
            store.records.len()
        );
        Ok(store)
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Current in-memory snapshot, in persisted order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Index of the record with `id` in the current order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Re-reads the slot, discarding in-memory state.
    pub fn reload(&mut self) {
        self.records = load(&self.storage, &self.slot);
    }

    /// Writes the current snapshot as-is.
    pub fn save(&self) -> StoreResult<()> {
        save(&self.storage, &self.slot, &self.records)
    }

    /// Adds `record` at the end of the list.
    pub fn append(&mut self, record: T) -> StoreResult<()> {
        let mut next = self.records.clone();
        next.push(record);
        self.commit(next)
    }

    /// Drops every record matching `predicate`; returns how many were removed.
    pub fn remove(&mut self, predicate: impl Fn(&T) -> bool) -> StoreResult<usize> {
        let next = self
            .records
            .iter()
            .filter(|record| !predicate(*record))
            .cloned()
            .collect::<Vec<_>>();
        let removed = self.records.len() - next.len();
        self.commit(next)?;
        Ok(removed)
    }

    /// Removes the record with `id`; returns whether it existed.
    pub fn remove_by_id(&mut self, id: &str) -> StoreResult<bool> {
        Ok(self.remove(|record| record.id() == id)? > 0)
    }

    /// Applies `mutator` to the record with `id`; returns whether it existed.
    pub fn update(&mut self, id: &str, mutator: impl FnOnce(&mut T)) -> StoreResult<bool> {
        let mut next = self.records.clone();
        let found = match next.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                mutator(record);
                true
            }
            None => false,
        };
        self.commit(next)?;
        Ok(found)
    }

    /// Swaps two positions. Out-of-range indexes are a no-op without a write.
    pub fn swap(&mut self, index_a: usize, index_b: usize) -> StoreResult<bool> {
        let len = self.records.len();
        if index_a >= len || index_b >= len {
            return Ok(false);
        }
        let mut next = self.records.clone();
        next.swap(index_a, index_b);
        self.commit(next)?;
        Ok(true)
    }

    /// Swaps the record at `index` with its neighbor in `direction`.
    pub fn move_adjacent(&mut self, index: usize, direction: MoveDirection) -> StoreResult<bool> {
        match adjacent_target(index, direction, self.records.len()) {
            Some(target) => self.swap(index, target),
            None => Ok(false),
        }
    }

    /// Replaces the whole list.
    pub fn replace_all(&mut self, records: Vec<T>) -> StoreResult<()> {
        self.commit(records)
    }

    fn commit(&mut self, next: Vec<T>) -> StoreResult<()> {
        save(&self.storage, &self.slot, &next)?;
        self.records = next;
        Ok(())
    }
}

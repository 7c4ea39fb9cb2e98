//! In-memory slot storage for tests and embedding without a database.

use super::{validate_key, SlotStorage, StorageResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Map-backed slot storage that counts writes.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with one raw slot value.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of `write_slot` calls served so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Returns a copy of the raw value stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        Ok(self.raw(key))
    }

    fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

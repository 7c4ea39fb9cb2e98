//! World clock use-case service.
//!
//! # Invariants
//! - A slot that was never written starts with the default clocks.
//! - Displayed times are derived per tick and never stored.

use crate::model::record::RecordId;
use crate::model::world_clock::{default_clocks, WorldClock, POPULAR_TIMEZONES};
use crate::service::{ServiceError, ServiceResult};
use crate::storage::{SlotStorage, SLOT_WORLD_CLOCKS};
use crate::store::record_store::RecordStore;
use crate::timefmt::render_times;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// World clock widget state bound to its persistent slot.
pub struct ClockService<S: SlotStorage> {
    store: RecordStore<WorldClock, S>,
}

impl<S: SlotStorage> ClockService<S> {
    /// Loads the clock list, seeding defaults on first use.
    pub fn open(storage: S) -> ServiceResult<Self> {
        let store = RecordStore::open_or_seed(storage, SLOT_WORLD_CLOCKS, default_clocks)?;
        Ok(Self { store })
    }

    pub fn clocks(&self) -> &[WorldClock] {
        self.store.records()
    }

    pub fn add(&mut self, city: &str, timezone: &str) -> ServiceResult<WorldClock> {
        let clock = WorldClock::new(city, timezone)?;
        self.store.append(clock.clone())?;
        Ok(clock)
    }

    /// Adds a clock from the popular-timezone catalog by position.
    pub fn add_popular(&mut self, index: usize) -> ServiceResult<WorldClock> {
        let preset = POPULAR_TIMEZONES
            .get(index)
            .ok_or(ServiceError::UnknownPreset(index))?;
        self.add(preset.city, preset.timezone)
    }

    pub fn delete(&mut self, id: &str) -> ServiceResult<()> {
        if self.store.get(id).is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        self.store.remove_by_id(id)?;
        Ok(())
    }

    /// Display strings for every clock at `now`, keyed by clock id.
    pub fn display_times(&self, now: DateTime<Utc>) -> BTreeMap<RecordId, String> {
        render_times(self.store.records(), now)
    }
}

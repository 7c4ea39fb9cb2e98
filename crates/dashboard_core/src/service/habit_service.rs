//! Habit tracker use-case service.
//!
//! # Responsibility
//! - Create/delete habits and toggle today's completion.
//! - Derive per-habit progress (streak, totals) for display.
//!
//! # Invariants
//! - Toggling only ever touches today's date.
//! - Streaks are recomputed from `completed_dates`; nothing derived is stored.

use crate::date_source::DateSource;
use crate::model::habit::Habit;
use crate::model::record::RecordId;
use crate::service::{ServiceError, ServiceResult};
use crate::storage::{SlotStorage, SLOT_HABITS};
use crate::store::record_store::RecordStore;
use crate::streak::StreakCalculator;

/// Derived display row for one habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitProgress {
    pub id: RecordId,
    pub name: String,
    pub streak: u32,
    pub total_completions: usize,
    pub completed_today: bool,
}

/// Habit widget state bound to its persistent slot and a date source.
pub struct HabitService<S: SlotStorage, D: DateSource> {
    store: RecordStore<Habit, S>,
    streaks: StreakCalculator<D>,
}

impl<S: SlotStorage, D: DateSource> HabitService<S, D> {
    pub fn open(storage: S, dates: D) -> Self {
        Self {
            store: RecordStore::open(storage, SLOT_HABITS),
            streaks: StreakCalculator::new(dates),
        }
    }

    pub fn habits(&self) -> &[Habit] {
        self.store.records()
    }

    pub fn add(&mut self, name: &str) -> ServiceResult<Habit> {
        let habit = Habit::new(name)?;
        self.store.append(habit.clone())?;
        Ok(habit)
    }

    /// Marks or unmarks today for one habit; returns whether today is now complete.
    pub fn toggle_today(&mut self, id: &str) -> ServiceResult<bool> {
        if self.store.get(id).is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        let today = self.streaks.today();
        let mut completed = false;
        self.store.update(id, |habit| completed = habit.toggle_date(today))?;
        Ok(completed)
    }

    pub fn delete(&mut self, id: &str) -> ServiceResult<()> {
        if self.store.get(id).is_none() {
            return Err(ServiceError::NotFound(id.to_string()));
        }
        self.store.remove_by_id(id)?;
        Ok(())
    }

    pub fn is_completed_today(&self, habit: &Habit) -> bool {
        habit.is_completed_on(self.streaks.today())
    }

    pub fn streak(&self, habit: &Habit) -> u32 {
        self.streaks.current(&habit.completed_dates)
    }

    /// Progress rows for every habit, in list order.
    pub fn overview(&self) -> Vec<HabitProgress> {
        let today = self.streaks.today();
        self.store
            .records()
            .iter()
            .map(|habit| HabitProgress {
                id: habit.id.clone(),
                name: habit.name.clone(),
                streak: crate::streak::streak(&habit.completed_dates, today),
                total_completions: habit.total_completions(),
                completed_today: habit.is_completed_on(today),
            })
            .collect()
    }
}

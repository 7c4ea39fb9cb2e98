//! Consecutive-day habit streaks.
//!
//! # Invariants
//! - The i-th most recent completed date must equal `today - i` days; the
//!   first mismatch ends the count.
//! - Today missing means a streak of 0, even when yesterday was completed.
//! - A date later than `today` sorts first and therefore also yields 0.

use crate::date_source::DateSource;
use chrono::{Days, NaiveDate};
use std::collections::BTreeSet;

/// Counts consecutive completed days ending at `today`.
pub fn streak(completed_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut count = 0;
    for (offset, date) in completed_dates.iter().rev().enumerate() {
        let expected = today.checked_sub_days(Days::new(offset as u64));
        if expected != Some(*date) {
            break;
        }
        count += 1;
    }
    count
}

/// Streak evaluation bound to a date source.
#[derive(Debug, Clone, Default)]
pub struct StreakCalculator<D: DateSource> {
    dates: D,
}

impl<D: DateSource> StreakCalculator<D> {
    pub fn new(dates: D) -> Self {
        Self { dates }
    }

    pub fn today(&self) -> NaiveDate {
        self.dates.today()
    }

    pub fn current(&self, completed_dates: &BTreeSet<NaiveDate>) -> u32 {
        streak(completed_dates, self.dates.today())
    }
}

//! Habit record.
//!
//! # Invariants
//! - `completed_dates` is a set: no duplicates, every entry a valid calendar date.
//! - Serialized as an array of `YYYY-MM-DD` strings.
//! - Entries that are not valid dates are dropped on load; the habit and
//!   its other dates survive.

use super::record::{new_record_id, require_text, Record, RecordId, RecordValidationError};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_dates")]
    pub completed_dates: BTreeSet<NaiveDate>,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Result<Self, RecordValidationError> {
        let name = name.into();
        require_text("name", &name)?;
        Ok(Self {
            id: new_record_id(),
            name,
            completed_dates: BTreeSet::new(),
        })
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Marks `date` complete, or clears it when already complete.
    ///
    /// Returns whether the date is complete afterwards.
    pub fn toggle_date(&mut self, date: NaiveDate) -> bool {
        if self.completed_dates.remove(&date) {
            false
        } else {
            self.completed_dates.insert(date);
            true
        }
    }

    pub fn total_completions(&self) -> usize {
        self.completed_dates.len()
    }
}

fn lenient_dates<'de, D>(deserializer: D) -> Result<BTreeSet<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = entries.len();
    let dates = entries
        .iter()
        .filter_map(|entry| entry.as_str()?.parse::<NaiveDate>().ok())
        .collect::<Vec<_>>();
    if dates.len() < total {
        warn!(
            "event=habit_dates_load module=model status=partial dropped={}",
            total - dates.len()
        );
    }
    Ok(dates.into_iter().collect())
}

impl Record for Habit {
    fn id(&self) -> &str {
        &self.id
    }
}

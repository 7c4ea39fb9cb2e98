//! Wall-clock access for date-dependent rules.
//!
//! "Today" is the UTC calendar date of the current instant, the same day
//! boundary used for the `YYYY-MM-DD` strings stored in habit slots.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current instant.
pub trait DateSource {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateSource;

impl DateSource for SystemDateSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Used by tests and replay tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateSource {
    instant: DateTime<Utc>,
}

impl FixedDateSource {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Pins the source to midday UTC of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
        Self::new(noon.and_utc())
    }
}

impl DateSource for FixedDateSource {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl<D: DateSource + ?Sized> DateSource for &D {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

//! World clock record and the built-in city catalog.

use super::record::{new_record_id, require_text, Record, RecordId, RecordValidationError};
use serde::{Deserialize, Serialize};

/// A city/zone pair offered when adding a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityZone {
    pub city: &'static str,
    pub timezone: &'static str,
}

const fn city_zone(city: &'static str, timezone: &'static str) -> CityZone {
    CityZone { city, timezone }
}

/// Cities offered by the add-clock picker, in display order.
pub const POPULAR_TIMEZONES: &[CityZone] = &[
    city_zone("New York", "America/New_York"),
    city_zone("London", "Europe/London"),
    city_zone("Tokyo", "Asia/Tokyo"),
    city_zone("Sydney", "Australia/Sydney"),
    city_zone("Dubai", "Asia/Dubai"),
    city_zone("Hong Kong", "Asia/Hong_Kong"),
    city_zone("Paris", "Europe/Paris"),
    city_zone("Singapore", "Asia/Singapore"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldClock {
    pub id: RecordId,
    pub city: String,
    /// IANA zone identifier. Not validated; unresolvable zones render a marker.
    pub timezone: String,
}

impl WorldClock {
    pub fn new(
        city: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        let city = city.into();
        let timezone = timezone.into();
        require_text("city", &city)?;
        require_text("timezone", &timezone)?;
        Ok(Self {
            id: new_record_id(),
            city,
            timezone,
        })
    }

    fn preset(id: &str, zone: CityZone) -> Self {
        Self {
            id: id.to_string(),
            city: zone.city.to_string(),
            timezone: zone.timezone.to_string(),
        }
    }
}

impl Record for WorldClock {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Clocks shown before the user ever saved a clock list.
pub fn default_clocks() -> Vec<WorldClock> {
    POPULAR_TIMEZONES
        .iter()
        .take(3)
        .enumerate()
        .map(|(idx, zone)| WorldClock::preset(&(idx + 1).to_string(), *zone))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::default_clocks;

    #[test]
    fn default_clocks_are_new_york_london_tokyo() {
        let clocks = default_clocks();
        let summary = clocks
            .iter()
            .map(|clock| (clock.id.as_str(), clock.timezone.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("1", "America/New_York"),
                ("2", "Europe/London"),
                ("3", "Asia/Tokyo"),
            ]
        );
    }
}

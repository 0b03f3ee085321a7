// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical calendar-day keys.
//!
//! A `DateKey` identifies one local calendar day. Two timestamps on the
//! same local calendar day always map to the same key regardless of their
//! time-of-day component, and ordering on keys is chronological (which
//! agrees with lexicographic ordering of the rendered `YYYY-MM-DD` form).
//!
//! ## Invariants
//!
//! - Keys are local-calendar-day values; no timezone conversion is ever
//!   applied when constructing or comparing them
//! - A key held in memory is always a valid date; malformed input fails
//!   at the parse boundary with an explicit error rather than producing
//!   a key that silently never matches

use crate::error::DomainError;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A canonical local-calendar-day identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    /// The calendar day.
    date: NaiveDate,
}

impl DateKey {
    /// Creates a `DateKey` for the calendar day of the given date.
    ///
    /// Total: every valid `NaiveDate` has exactly one key.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Creates a `DateKey` from year/month/day components.
    ///
    /// # Arguments
    ///
    /// * `year` - The year component
    /// * `month` - The month component (1-based)
    /// * `day` - The day-of-month component
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the components do not form a
    /// valid calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::new)
            .ok_or(DomainError::InvalidDate { year, month, day })
    }

    /// Creates a `DateKey` for the local calendar day of a timestamp.
    ///
    /// The key is taken from the timestamp's wall-clock date in its own
    /// timezone, never from the UTC date, which can differ near
    /// midnight.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::new(datetime.naive_local().date())
    }

    /// Returns the underlying calendar day.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.date
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self::new)
            .map_err(|error| DomainError::DateParseError {
                date_string: s.to_string(),
                error: error.to_string(),
            })
    }
}

impl Serialize for DateKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: String = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_zero_padded() {
        let key = DateKey::from_ymd(2025, 3, 7).unwrap();
        assert_eq!(key.to_string(), "2025-03-07");
    }

    #[test]
    fn test_round_trip_through_string_form() {
        let key = DateKey::from_ymd(2025, 12, 31).unwrap();
        let parsed: DateKey = key.to_string().parse().unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let earlier = DateKey::from_ymd(2025, 3, 9).unwrap();
        let later = DateKey::from_ymd(2025, 3, 10).unwrap();
        assert!(earlier < later);

        // Lexicographic ordering of the rendered form agrees
        assert!(earlier.to_string() < later.to_string());
    }

    #[test]
    fn test_same_day_always_maps_to_same_key() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(DateKey::new(date), DateKey::from_ymd(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_time_of_day_never_changes_the_key() {
        let offset = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let morning = offset.with_ymd_and_hms(2025, 6, 15, 0, 30, 0).unwrap();
        let evening = offset.with_ymd_and_hms(2025, 6, 15, 23, 30, 0).unwrap();

        assert_eq!(DateKey::from_datetime(&morning), DateKey::from_datetime(&evening));
        assert_eq!(
            DateKey::from_datetime(&morning),
            DateKey::from_ymd(2025, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_key_follows_wall_clock_date_not_utc() {
        // Half past midnight on Mar 11 at UTC+13 is still Mar 10 in UTC;
        // the key must say Mar 11
        let offset = chrono::FixedOffset::east_opt(13 * 3600).unwrap();
        let datetime = offset.with_ymd_and_hms(2025, 3, 11, 0, 30, 0).unwrap();

        assert_eq!(
            DateKey::from_datetime(&datetime),
            DateKey::from_ymd(2025, 3, 11).unwrap()
        );
        assert_eq!(datetime.to_utc().date_naive().day(), 10);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let result: Result<DateKey, DomainError> = "not-a-date".parse();
        assert!(matches!(result, Err(DomainError::DateParseError { .. })));
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        let result: Result<DateKey, DomainError> = "2025-02-30".parse();
        assert!(matches!(result, Err(DomainError::DateParseError { .. })));
    }

    #[test]
    fn test_from_ymd_rejects_invalid_components() {
        let result = DateKey::from_ymd(2025, 13, 1);
        assert!(matches!(result, Err(DomainError::InvalidDate { .. })));
    }

    #[test]
    fn test_serde_uses_string_form() {
        let key = DateKey::from_ymd(2025, 1, 2).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2025-01-02\"");

        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_serde_rejects_malformed_key() {
        let result: Result<DateKey, _> = serde_json::from_str("\"03/10/2025\"");
        assert!(result.is_err());
    }
}

//! Canonical calendar-day keys.
//!
//! Every component compares and stores days in the locale-invariant
//! `YYYY-MM-DD` form, so lexical ordering equals chronological ordering and
//! the key written with a log entry matches the key computed for "today"
//! regardless of locale or timezone formatting quirks. No other module
//! handles raw datetimes.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
#[error("invalid date key {0:?}: expected YYYY-MM-DD")]
pub struct DateKeyError(pub String);

/// One local calendar day. Serialises as its `YYYY-MM-DD` string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today on the local clock — the reference day for the live status card.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn parse(raw: &str) -> Result<Self, DateKeyError> {
        NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| DateKeyError(raw.to_string()))
    }

    /// The previous calendar day, `None` at the representable minimum.
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Day-of-month component (1–31). The monthly rate uses this as its
    /// days-elapsed denominator.
    pub fn day_of_month(self) -> u32 {
        self.0.day()
    }

    /// Year-month pair, for grouping keys into calendar months.
    pub fn year_month(self) -> (i32, u32) {
        (self.0.year(), self.0.month())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_iso_form() {
        let key = DateKey::parse("2024-05-03").unwrap();
        assert_eq!(key.to_string(), "2024-05-03");
    }

    #[test]
    fn rejects_non_iso_forms() {
        assert!(DateKey::parse("03/05/2024").is_err());
        assert!(DateKey::parse("2024-5-3").is_err());
        assert!(DateKey::parse("not a date").is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        let earlier = DateKey::parse("2024-04-30").unwrap();
        let later = DateKey::parse("2024-05-01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn pred_crosses_month_boundary() {
        let first = DateKey::parse("2024-05-01").unwrap();
        assert_eq!(first.pred().unwrap().to_string(), "2024-04-30");
    }

    #[test]
    fn year_month_and_day() {
        let key = DateKey::parse("2024-05-10").unwrap();
        assert_eq!(key.year_month(), (2024, 5));
        assert_eq!(key.day_of_month(), 10);
    }

    #[test]
    fn serde_round_trip_as_string() {
        let key = DateKey::parse("2024-05-03").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-05-03\"");
        let back: DateKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}

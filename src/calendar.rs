//! Synchronized taken/missed date sets for one patient.
//!
//! Intake logs arrive per medication; the calendar view needs one patient-
//! level pair of sets. Synchronization is a plain set-union per flag: a date
//! is in `taken_dates` if at least one medication was taken that day, and in
//! `missed_dates` if at least one was missed. When medications disagree on
//! the same day the date sits in both sets; [`IntakeCalendar::day_verdict`]
//! resolves that for single-verdict consumers with "any taken wins".

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::date_key::DateKey;
use crate::models::IntakeLogEntry;

/// Single-day verdict for calendar display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayVerdict {
    Taken,
    Missed,
}

/// Deduplicated taken/missed date sets, rebuilt from scratch on every
/// synchronization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeCalendar {
    pub taken_dates: BTreeSet<DateKey>,
    pub missed_dates: BTreeSet<DateKey>,
}

impl IntakeCalendar {
    /// Union the per-medication log streams into one calendar.
    pub fn from_logs<I>(logs: I) -> Self
    where
        I: IntoIterator<Item = IntakeLogEntry>,
    {
        let mut calendar = Self::default();
        for entry in logs {
            if entry.taken {
                calendar.taken_dates.insert(entry.date);
            } else {
                calendar.missed_dates.insert(entry.date);
            }
        }
        calendar
    }

    /// Resolve a day to a single verdict. Taken wins over missed when both
    /// memberships hold; `None` when the day has no log entry at all.
    pub fn day_verdict(&self, date: DateKey) -> Option<DayVerdict> {
        if self.taken_dates.contains(&date) {
            Some(DayVerdict::Taken)
        } else if self.missed_dates.contains(&date) {
            Some(DayVerdict::Missed)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.taken_dates.is_empty() && self.missed_dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(date: &str, taken: bool) -> IntakeLogEntry {
        IntakeLogEntry {
            medication_id: Uuid::new_v4(),
            date: DateKey::parse(date).unwrap(),
            taken,
        }
    }

    #[test]
    fn unions_across_medications() {
        let calendar = IntakeCalendar::from_logs([
            entry("2024-05-01", true),
            entry("2024-05-02", true),
            entry("2024-05-01", true), // second medication, same day
            entry("2024-05-03", false),
        ]);
        assert_eq!(calendar.taken_dates.len(), 2);
        assert_eq!(calendar.missed_dates.len(), 1);
    }

    #[test]
    fn disagreeing_day_kept_in_both_sets() {
        let calendar =
            IntakeCalendar::from_logs([entry("2024-05-01", true), entry("2024-05-01", false)]);
        let day = DateKey::parse("2024-05-01").unwrap();
        assert!(calendar.taken_dates.contains(&day));
        assert!(calendar.missed_dates.contains(&day));
    }

    #[test]
    fn verdict_any_taken_wins() {
        let calendar =
            IntakeCalendar::from_logs([entry("2024-05-01", true), entry("2024-05-01", false)]);
        let day = DateKey::parse("2024-05-01").unwrap();
        assert_eq!(calendar.day_verdict(day), Some(DayVerdict::Taken));
    }

    #[test]
    fn verdict_none_without_entries() {
        let calendar = IntakeCalendar::from_logs([entry("2024-05-01", false)]);
        assert_eq!(
            calendar.day_verdict(DateKey::parse("2024-05-01").unwrap()),
            Some(DayVerdict::Missed)
        );
        assert_eq!(
            calendar.day_verdict(DateKey::parse("2024-05-02").unwrap()),
            None
        );
    }

    #[test]
    fn empty_logs_give_empty_calendar() {
        let calendar = IntakeCalendar::from_logs([]);
        assert!(calendar.is_empty());
    }
}

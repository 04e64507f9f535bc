//! Daily status classification for the status card.

use serde::{Deserialize, Serialize};

use crate::calendar::IntakeCalendar;
use crate::date_key::DateKey;

/// Status of one calendar day. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStatus {
    Completed,
    Missed,
    /// Today, with doses still outstanding — the caller renders the
    /// actionable per-medication list.
    Pending,
    NoRecords,
}

/// Classify a target day.
///
/// The check order matters: the live `today_taken` flag is authoritative for
/// the current day and overrides the historical log sets, because the remote
/// service may not have written today's log entries yet.
pub fn classify_day(
    target: DateKey,
    today: DateKey,
    calendar: &IntakeCalendar,
    today_taken: bool,
    has_medications: bool,
) -> DayStatus {
    if !has_medications {
        return DayStatus::NoRecords;
    }
    if target == today && today_taken {
        return DayStatus::Completed;
    }
    if calendar.taken_dates.contains(&target) {
        return DayStatus::Completed;
    }
    if calendar.missed_dates.contains(&target) {
        return DayStatus::Missed;
    }
    if target == today {
        return DayStatus::Pending;
    }
    DayStatus::NoRecords
}

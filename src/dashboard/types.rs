use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::IntakeCalendar;
use crate::date_key::DateKey;
use crate::models::{Medication, Patient};
use crate::service::ServiceError;
use crate::status::{classify_day, DayStatus};

/// Placeholder shown when a medication carries no description.
pub const NO_DESCRIPTION: &str = "No description";

/// Placeholder shown when no medication is currently marked taken.
pub const NO_LAST_TAKEN: &str = "N/A";

#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("Service call failed: {0}")]
    Service(#[from] ServiceError),

    #[error("Malformed adherence percentage: {raw:?}")]
    Percent { raw: String },
}

/// Everything the patient dashboard shows, computed in one pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientOverview {
    pub medications: Vec<Medication>,
    pub calendar: IntakeCalendar,
    /// True iff every medication has a live taken record for today.
    pub today_taken: bool,
    pub today_status: DayStatus,
    pub streak_days: u32,
    pub monthly_rate_percent: u8,
}

impl PatientOverview {
    /// Status card for an arbitrary selected day, against the same `today`
    /// the overview was computed with.
    pub fn status_for(&self, target: DateKey, today: DateKey) -> DayStatus {
        classify_day(
            target,
            today,
            &self.calendar,
            self.today_taken,
            !self.medications.is_empty(),
        )
    }
}

/// Per-patient card on the caretaker dashboard. Derived on every request,
/// never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientAdherenceSummary {
    pub patient: Patient,
    /// Rounded mean of the per-medication adherence percentages; 0 when the
    /// patient has no medications.
    pub average_adherence_percent: u8,
    /// Comma-joined names of medications currently marked taken, or
    /// [`NO_LAST_TAKEN`].
    pub last_taken_summary: String,
    pub medications: Vec<Medication>,
}

/// One row of the merged history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub medication_name: String,
    pub date: DateKey,
    pub taken: bool,
    pub description: String,
}

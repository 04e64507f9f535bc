use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date_key::DateKey;

/// A medication as the records service returns it. `taken`/`taken_date` are
/// the live today-flag: whether the medication has already been marked taken
/// and on which day. Stale flags from earlier days are ignored via
/// [`Medication::taken_today`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    #[serde(rename = "user_id")]
    pub patient_id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub taken: bool,
    #[serde(default)]
    pub taken_date: Option<DateKey>,
}

impl Medication {
    /// Whether the live flag records a taken dose for the given day.
    pub fn taken_today(&self, today: DateKey) -> bool {
        self.taken && self.taken_date == Some(today)
    }
}

/// Fields the patient supplies when creating or editing a medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationInput {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

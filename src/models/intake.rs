use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date_key::DateKey;

/// One day's recorded outcome for one medication. Immutable once written;
/// the history endpoint only ever appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeLogEntry {
    pub medication_id: Uuid,
    pub date: DateKey,
    pub taken: bool,
}

//! Medication Records Service contract.
//!
//! The engine treats the records service purely as a data source behind the
//! [`MedicationRecords`] trait; [`http::HttpMedicationRecords`] is the real
//! client and tests substitute in-memory implementations. All calls either
//! return within the configured timeout or fail with a [`ServiceError`].

pub mod http;

use thiserror::Error;
use uuid::Uuid;

pub use http::HttpMedicationRecords;

use crate::models::{IntakeLogEntry, Medication, MedicationInput, Patient};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Cannot reach medication records service at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed service response: {0}")]
    ResponseParsing(String),
}

/// Read/write contract against the records service.
///
/// Every method is one remote call; composition (fan-out, joins, failure
/// policy) is the caller's concern and lives in the `dashboard` module.
#[allow(async_fn_in_trait)]
pub trait MedicationRecords {
    /// Patients assigned to a caretaker.
    async fn list_patients_for_caretaker(
        &self,
        caretaker_id: Uuid,
    ) -> Result<Vec<Patient>, ServiceError>;

    /// All medications owned by a patient, with live taken-flags.
    async fn list_medications(&self, patient_id: Uuid) -> Result<Vec<Medication>, ServiceError>;

    /// Per-medication adherence percentage, as the service formats it
    /// (e.g. `"82%"`). Parsing is the consumer's job.
    async fn medication_adherence(&self, medication_id: Uuid) -> Result<String, ServiceError>;

    /// Full intake log for one medication.
    async fn medication_history(
        &self,
        medication_id: Uuid,
    ) -> Result<Vec<IntakeLogEntry>, ServiceError>;

    /// Mark one medication taken for the current day.
    async fn mark_medication_taken(&self, medication_id: Uuid) -> Result<(), ServiceError>;

    async fn create_medication(
        &self,
        patient_id: Uuid,
        input: &MedicationInput,
    ) -> Result<Medication, ServiceError>;

    async fn update_medication(
        &self,
        medication_id: Uuid,
        input: &MedicationInput,
    ) -> Result<Medication, ServiceError>;

    async fn delete_medication(&self, medication_id: Uuid) -> Result<(), ServiceError>;
}

use futures_util::future::try_join_all;

use super::types::{AggregationError, PatientAdherenceSummary, NO_LAST_TAKEN};
use crate::context::EngineContext;
use crate::models::Patient;
use crate::service::MedicationRecords;

/// Build the caretaker dashboard: one adherence summary per assigned
/// patient, in the order the service lists them.
///
/// Fans out per patient, and within each patient per medication. Every group
/// joins all-or-nothing: a single failed fetch rejects the whole dashboard
/// load, and the caller retries the aggregation as a unit.
pub async fn load_caretaker_dashboard<S: MedicationRecords>(
    service: &S,
    ctx: &EngineContext,
) -> Result<Vec<PatientAdherenceSummary>, AggregationError> {
    let patients = service.list_patients_for_caretaker(ctx.user_id).await?;
    tracing::debug!(
        caretaker_id = %ctx.user_id,
        patients = patients.len(),
        "loading caretaker dashboard"
    );

    try_join_all(
        patients
            .into_iter()
            .map(|patient| summarize_patient(service, patient)),
    )
    .await
}

async fn summarize_patient<S: MedicationRecords>(
    service: &S,
    patient: Patient,
) -> Result<PatientAdherenceSummary, AggregationError> {
    let medications = service.list_medications(patient.id).await?;

    let raw = try_join_all(
        medications
            .iter()
            .map(|med| service.medication_adherence(med.id)),
    )
    .await?;
    let percentages = raw
        .iter()
        .map(|s| parse_percent(s))
        .collect::<Result<Vec<u8>, _>>()?;

    let average_adherence_percent = if percentages.is_empty() {
        0
    } else {
        let sum: u32 = percentages.iter().map(|&p| u32::from(p)).sum();
        (f64::from(sum) / percentages.len() as f64).round() as u8
    };

    let taken_names: Vec<&str> = medications
        .iter()
        .filter(|med| med.taken)
        .map(|med| med.name.as_str())
        .collect();
    let last_taken_summary = if taken_names.is_empty() {
        NO_LAST_TAKEN.to_string()
    } else {
        taken_names.join(", ")
    };

    Ok(PatientAdherenceSummary {
        patient,
        average_adherence_percent,
        last_taken_summary,
        medications,
    })
}

/// Parse an adherence string like `"82%"` into its integer value.
pub(crate) fn parse_percent(raw: &str) -> Result<u8, AggregationError> {
    raw.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|&value| value <= 100)
        .ok_or_else(|| AggregationError::Percent {
            raw: raw.to_string(),
        })
}

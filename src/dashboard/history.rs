use futures_util::future::try_join_all;

use super::types::{AggregationError, HistoryEntry, NO_DESCRIPTION};
use crate::models::Medication;
use crate::service::MedicationRecords;

/// Merge every medication's intake log into one chronological view, most
/// recent day first.
///
/// Fans out one history request per medication and joins fail-fast — a
/// single failed fetch rejects the whole view. Medications without history
/// contribute nothing. The sort is stable and the fan-out join preserves
/// medication order, so recomputing over unchanged inputs yields identical
/// output.
pub async fn load_patient_history<S: MedicationRecords>(
    service: &S,
    medications: &[Medication],
) -> Result<Vec<HistoryEntry>, AggregationError> {
    let logs = try_join_all(
        medications
            .iter()
            .map(|med| service.medication_history(med.id)),
    )
    .await?;

    let mut entries: Vec<HistoryEntry> = medications
        .iter()
        .zip(logs)
        .flat_map(|(med, log)| {
            log.into_iter().map(move |entry| HistoryEntry {
                medication_name: med.name.clone(),
                date: entry.date,
                taken: entry.taken,
                description: med
                    .description
                    .clone()
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            })
        })
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(entries)
}

use futures_util::future::try_join_all;

use super::types::{AggregationError, PatientOverview};
use crate::calendar::IntakeCalendar;
use crate::context::EngineContext;
use crate::date_key::DateKey;
use crate::service::MedicationRecords;
use crate::stats::{monthly_rate, streak_ending_at};
use crate::status::classify_day;

/// Load the full patient dashboard state for today.
pub async fn load_patient_overview<S: MedicationRecords>(
    service: &S,
    ctx: &EngineContext,
) -> Result<PatientOverview, AggregationError> {
    load_patient_overview_at(service, ctx, DateKey::today()).await
}

/// Same as [`load_patient_overview`] with an explicit reference day.
///
/// Fetches the medication list, then fans out one history request per
/// medication and joins them all before computing anything. The join is
/// all-or-nothing: one failed history fetch fails the whole overview and no
/// partial calendar is surfaced.
pub async fn load_patient_overview_at<S: MedicationRecords>(
    service: &S,
    ctx: &EngineContext,
    today: DateKey,
) -> Result<PatientOverview, AggregationError> {
    let medications = service.list_medications(ctx.user_id).await?;
    tracing::debug!(
        patient_id = %ctx.user_id,
        medications = medications.len(),
        "loading patient overview"
    );

    let logs = try_join_all(
        medications
            .iter()
            .map(|med| service.medication_history(med.id)),
    )
    .await?;
    let calendar = IntakeCalendar::from_logs(logs.into_iter().flatten());

    // The live flag is authoritative for today: the service may not have
    // written today's log entries yet.
    let today_taken =
        !medications.is_empty() && medications.iter().all(|med| med.taken_today(today));
    let today_status = classify_day(
        today,
        today,
        &calendar,
        today_taken,
        !medications.is_empty(),
    );

    Ok(PatientOverview {
        streak_days: streak_ending_at(&calendar.taken_dates, today),
        monthly_rate_percent: monthly_rate(&calendar.taken_dates, today),
        medications,
        calendar,
        today_taken,
        today_status,
    })
}

/// Mark every not-yet-taken medication as taken for today. Medications whose
/// live flag already records today are skipped, so repeating the call is a
/// no-op. Returns how many medications were marked; all-or-nothing on
/// failure.
pub async fn mark_all_taken<S: MedicationRecords>(
    service: &S,
    ctx: &EngineContext,
) -> Result<u32, AggregationError> {
    mark_all_taken_at(service, ctx, DateKey::today()).await
}

/// Same as [`mark_all_taken`] with an explicit reference day.
pub async fn mark_all_taken_at<S: MedicationRecords>(
    service: &S,
    ctx: &EngineContext,
    today: DateKey,
) -> Result<u32, AggregationError> {
    let medications = service.list_medications(ctx.user_id).await?;
    let pending: Vec<_> = medications
        .iter()
        .filter(|med| !med.taken_today(today))
        .collect();

    if pending.is_empty() {
        tracing::debug!(patient_id = %ctx.user_id, "all medications already taken today");
        return Ok(0);
    }

    try_join_all(
        pending
            .iter()
            .map(|med| service.mark_medication_taken(med.id)),
    )
    .await?;

    Ok(pending.len() as u32)
}

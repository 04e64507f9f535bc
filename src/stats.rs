//! Streak and monthly-rate calculators over the taken-date set.

use std::collections::BTreeSet;

use crate::config::MAX_STREAK_DAYS;
use crate::date_key::DateKey;

/// Count of consecutive taken days ending at `reference`, walking backward
/// until the first absent day. Capped at [`MAX_STREAK_DAYS`] so the walk
/// stays finite whatever the data looks like.
pub fn streak_ending_at(taken: &BTreeSet<DateKey>, reference: DateKey) -> u32 {
    let mut streak = 0;
    let mut day = reference;
    while streak < MAX_STREAK_DAYS && taken.contains(&day) {
        streak += 1;
        match day.pred() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Adherence rate so far this month: taken days within the reference month
/// over days elapsed (the reference's day-of-month, not the month length),
/// rounded to the nearest integer percent and clamped to 100.
pub fn monthly_rate(taken: &BTreeSet<DateKey>, reference: DateKey) -> u8 {
    let days_elapsed = reference.day_of_month();
    let count = taken
        .iter()
        .filter(|d| d.year_month() == reference.year_month())
        .count() as u32;
    let rate = (f64::from(count) / f64::from(days_elapsed) * 100.0).round() as u32;
    rate.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: &str) -> DateKey {
        DateKey::parse(raw).unwrap()
    }

    fn taken(days: &[&str]) -> BTreeSet<DateKey> {
        days.iter().map(|d| day(d)).collect()
    }

    #[test]
    fn empty_set_streak_is_zero() {
        assert_eq!(streak_ending_at(&BTreeSet::new(), day("2024-05-03")), 0);
    }

    #[test]
    fn streak_counts_backward_until_gap() {
        let set = taken(&["2024-05-01", "2024-05-02", "2024-05-03", "2024-04-29"]);
        assert_eq!(streak_ending_at(&set, day("2024-05-03")), 3);
    }

    #[test]
    fn streak_zero_when_reference_absent() {
        let set = taken(&["2024-05-01", "2024-05-02"]);
        assert_eq!(streak_ending_at(&set, day("2024-05-03")), 0);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        let set = taken(&["2024-04-30", "2024-05-01", "2024-05-02"]);
        assert_eq!(streak_ending_at(&set, day("2024-05-02")), 3);
    }

    #[test]
    fn monthly_rate_uses_days_elapsed_denominator() {
        // 7 taken days by day 10 of the month: round(7/10 * 100) = 70.
        let set = taken(&[
            "2024-05-01",
            "2024-05-02",
            "2024-05-03",
            "2024-05-05",
            "2024-05-07",
            "2024-05-08",
            "2024-05-09",
        ]);
        assert_eq!(monthly_rate(&set, day("2024-05-10")), 70);
    }

    #[test]
    fn monthly_rate_ignores_other_months() {
        let set = taken(&["2024-04-28", "2024-04-29", "2024-05-01"]);
        assert_eq!(monthly_rate(&set, day("2024-05-02")), 50);
    }

    #[test]
    fn monthly_rate_empty_is_zero() {
        assert_eq!(monthly_rate(&BTreeSet::new(), day("2024-05-10")), 0);
    }

    #[test]
    fn monthly_rate_full_month_so_far_is_hundred() {
        let set = taken(&["2024-05-01", "2024-05-02", "2024-05-03"]);
        assert_eq!(monthly_rate(&set, day("2024-05-03")), 100);
    }

    #[test]
    fn monthly_rate_clamped_with_future_dated_entries() {
        // Corrupted data: entries dated later in the month than the
        // reference day must not push the rate past 100.
        let set = taken(&[
            "2024-05-01",
            "2024-05-02",
            "2024-05-20",
            "2024-05-21",
            "2024-05-22",
        ]);
        assert_eq!(monthly_rate(&set, day("2024-05-02")), 100);
    }
}

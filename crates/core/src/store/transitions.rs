//! Pure state transitions
//!
//! Free functions with no I/O so the store's arithmetic can be tested
//! without a storage backend. [`service::CarbonStore`](super::service)
//! composes these with persistence and event delivery.

use chrono::Datelike;
use ecotrace_domain::constants::{PROGRESS_COMPLETE, WEEKLY_FILL};
use ecotrace_domain::{Achievement, Activity, DayBucket};

/// Short weekday names in bucket order
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Result of applying a progress value to an achievement
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub achievement: Achievement,
    /// True only on the incomplete -> complete transition
    pub newly_completed: bool,
}

/// Apply a progress value to an achievement
///
/// Completed achievements are terminal: the input value is ignored and
/// nothing transitions. Otherwise the value is clamped to [0, 100] and
/// `is_completed` is re-derived, reporting whether this update crossed the
/// completion threshold.
pub fn apply_progress(achievement: &Achievement, new_progress: f64) -> ProgressUpdate {
    if achievement.is_completed {
        return ProgressUpdate { achievement: achievement.clone(), newly_completed: false };
    }

    let progress = new_progress.clamp(0.0, PROGRESS_COMPLETE);
    let is_completed = progress >= PROGRESS_COMPLETE;
    let newly_completed = is_completed && !achievement.is_completed;

    let mut updated = achievement.clone();
    updated.progress = progress;
    updated.is_completed = is_completed;

    ProgressUpdate { achievement: updated, newly_completed }
}

/// Sum of emissions across the whole activity sequence, kg CO2e
pub fn total_emissions(activities: &[Activity]) -> f64 {
    activities.iter().map(|activity| activity.emissions).sum()
}

/// Aggregate emissions into seven weekday buckets (Mon..Sun)
///
/// Buckets sum the emissions of every activity logged on that weekday and
/// carry the chart fill color.
pub fn weekly_series(activities: &[Activity]) -> Vec<DayBucket> {
    let mut sums = [0.0_f64; 7];
    for activity in activities {
        let index = activity.logged_at.weekday().num_days_from_monday() as usize;
        sums[index] += activity.emissions;
    }

    WEEKDAYS
        .iter()
        .zip(sums)
        .map(|(name, value)| DayBucket {
            name: (*name).to_string(),
            value,
            fill: WEEKLY_FILL.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use ecotrace_domain::ActivityCategory;

    use super::*;

    fn achievement(progress: f64, is_completed: bool) -> Achievement {
        Achievement {
            id: "2".into(),
            title: "Plant-Based Pioneer".into(),
            description: "Eat plant-based meals for 10 days in a month".into(),
            progress,
            is_completed,
            icon: "utensils".into(),
            points: 150,
            required_value: 10,
            category: "Food".into(),
        }
    }

    fn activity(emissions: f64, logged_at: chrono::DateTime<Utc>) -> Activity {
        Activity {
            id: "a".into(),
            name: "Salad".into(),
            category: ActivityCategory::Food,
            emissions,
            logged_at,
            timestamp_label: "Just now".into(),
            icon: "utensils".into(),
            badge_class: "badge-green".into(),
        }
    }

    #[test]
    fn progress_below_threshold_updates_without_completion() {
        let update = apply_progress(&achievement(70.0, false), 80.0);
        assert!((update.achievement.progress - 80.0).abs() < f64::EPSILON);
        assert!(!update.achievement.is_completed);
        assert!(!update.newly_completed);
    }

    #[test]
    fn progress_is_clamped_to_valid_range() {
        let high = apply_progress(&achievement(95.0, false), 105.0);
        assert!((high.achievement.progress - 100.0).abs() < f64::EPSILON);
        assert!(high.achievement.is_completed);
        assert!(high.newly_completed);

        let low = apply_progress(&achievement(40.0, false), -25.0);
        assert!((low.achievement.progress - 0.0).abs() < f64::EPSILON);
        assert!(!low.achievement.is_completed);
    }

    #[test]
    fn completed_achievements_are_terminal() {
        let completed = achievement(100.0, true);

        let downgrade = apply_progress(&completed, 10.0);
        assert_eq!(downgrade.achievement, completed);
        assert!(!downgrade.newly_completed);

        let resaturate = apply_progress(&completed, 100.0);
        assert!(!resaturate.newly_completed);
    }

    #[test]
    fn total_emissions_is_order_independent_sum() {
        let now = Utc::now();
        let mut activities =
            vec![activity(3.2, now), activity(1.5, now), activity(2.8, now), activity(3.5, now)];

        let total = total_emissions(&activities);
        activities.reverse();
        let reversed_total = total_emissions(&activities);

        assert!((total - 11.0).abs() < 1e-9);
        assert!((total - reversed_total).abs() < f64::EPSILON);
    }

    #[test]
    fn weekly_series_buckets_by_weekday() {
        // 2025-06-02 is a Monday
        let monday = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).single().expect("valid timestamp");
        let wednesday =
            Utc.with_ymd_and_hms(2025, 6, 4, 9, 0, 0).single().expect("valid timestamp");

        let series = weekly_series(&[
            activity(1.0, monday),
            activity(2.5, monday),
            activity(4.0, wednesday),
        ]);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].name, "Mon");
        assert!((series[0].value - 3.5).abs() < 1e-9);
        assert!((series[2].value - 4.0).abs() < 1e-9);
        assert!((series[1].value - 0.0).abs() < f64::EPSILON);
        assert!(series.iter().all(|bucket| bucket.fill == WEEKLY_FILL));
    }

    #[test]
    fn weekly_series_is_empty_sums_for_no_activities() {
        let series = weekly_series(&[]);
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|bucket| bucket.value == 0.0));
    }
}

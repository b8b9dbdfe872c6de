//! Statistics and derived-view types
//!
//! `UserStats` is a persisted record; `DayBucket` rows are derived from the
//! activity sequence and never stored.

use serde::{Deserialize, Serialize};

/// Aggregate usage statistics, persisted alongside activities
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserStats {
    /// Number of activities ever logged
    pub total_activities: u64,
    /// Consecutive days with at least one logged activity
    pub streak_days: u32,
    /// Estimated kg CO2e avoided through tracking
    pub saved_emissions: f64,
}

/// One weekday of the weekly emissions series
///
/// Derived view: recomputed from the activity sequence on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayBucket {
    /// Short weekday name ("Mon" .. "Sun")
    pub name: String,
    /// Summed emissions for the weekday, kg CO2e
    pub value: f64,
    /// Chart fill color
    pub fill: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_stats_serialization() {
        let stats = UserStats { total_activities: 24, streak_days: 8, saved_emissions: 45.2 };

        let json = serde_json::to_string(&stats).expect("serialize");
        assert!(json.contains("total_activities"));
        assert!(json.contains("saved_emissions"));

        let back: UserStats = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, stats);
    }
}

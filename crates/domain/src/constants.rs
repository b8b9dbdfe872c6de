//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Persisted document keys (stable across versions; renaming orphans records)
pub const ACTIVITIES_KEY: &str = "carbonActivities";
pub const ACHIEVEMENTS_KEY: &str = "carbonAchievements";
pub const USER_STATS_KEY: &str = "carbonUserStats";

// Achievement progress
pub const PROGRESS_COMPLETE: f64 = 100.0;
pub const PROGRESS_INCREMENT: f64 = 10.0;

// Stats heuristics
pub const SAVED_EMISSIONS_FACTOR: f64 = 0.2; // assumed reduction from tracking

// Weekly chart display
pub const WEEKLY_FILL: &str = "#22c55e";

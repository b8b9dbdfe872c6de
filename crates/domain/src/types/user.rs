//! User profile types
//!
//! The profile is intentionally not persisted: it resets to the default
//! record at every startup (a known inconsistency with the other records,
//! kept for behavioral compatibility).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The single local user's profile
///
/// # Field Invariants
/// - `points` only ever increases, by exactly one award per achievement
///   completion
/// - `goal` is a weekly kg CO2e budget (> 0)
/// - `level` starts at 1
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Weekly kg CO2e budget
    pub goal: f64,
    pub join_date: NaiveDate,
    pub level: u32,
    pub points: u32,
}

//! Achievement types
//!
//! Gamification goals with progress toward completion and a point reward.

use serde::{Deserialize, Serialize};

/// A gamification goal
///
/// # Field Invariants
/// - `progress` is kept within [0, 100] by the store
/// - `is_completed` is true iff `progress >= 100`; the store, not callers,
///   enforces this derivation after every mutation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub description: String,
    /// Completion percentage in [0, 100]
    pub progress: f64,
    pub is_completed: bool,
    pub icon: String,
    /// Points awarded once on completion
    pub points: u32,
    /// Target value described by the achievement (display only)
    pub required_value: u32,
    /// Category matched case-insensitively against activity categories
    pub category: String,
}

impl Achievement {
    /// Whether a logged activity in `category` counts toward this goal
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

//! Store events delivered to observers

use serde::Serialize;

/// Event emitted after a committed store mutation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A new activity was appended to the log
    ActivityLogged {
        id: String,
        name: String,
        category: String,
    },
    /// An achievement crossed the completion threshold
    ///
    /// Emitted exactly once per achievement, together with the point award.
    AchievementUnlocked {
        id: String,
        title: String,
        points: u32,
    },
}

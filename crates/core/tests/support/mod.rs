//! Mock port implementations for store tests
//!
//! Provides an in-memory repository and a recording observer, enabling
//! deterministic tests without a database.

use ecotrace_core::{StateRepository, StoreEvent, StoreObserver};
use ecotrace_domain::{Achievement, Activity, EcoTraceError, Result as DomainResult, UserStats};
use parking_lot::Mutex;

/// In-memory implementation of `StateRepository`.
///
/// Records start absent (as on first launch); saves replace the stored
/// value so a second store opened on the same repository sees the
/// persisted state. Individual records can be marked corrupt to exercise
/// the seed fallback path.
#[derive(Default)]
pub struct MemoryStateRepository {
    activities: Mutex<Option<Vec<Activity>>>,
    achievements: Mutex<Option<Vec<Achievement>>>,
    stats: Mutex<Option<UserStats>>,
    corrupt_activities: Mutex<bool>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the activities record unreadable, as if the stored document
    /// were corrupt.
    pub fn with_corrupt_activities(self) -> Self {
        *self.corrupt_activities.lock() = true;
        self
    }

    /// The last activity sequence saved through the port, if any.
    pub fn saved_activities(&self) -> Option<Vec<Activity>> {
        self.activities.lock().clone()
    }

    /// The last achievement collection saved through the port, if any.
    pub fn saved_achievements(&self) -> Option<Vec<Achievement>> {
        self.achievements.lock().clone()
    }
}

impl StateRepository for MemoryStateRepository {
    fn load_activities(&self) -> DomainResult<Option<Vec<Activity>>> {
        if *self.corrupt_activities.lock() {
            return Err(EcoTraceError::Database("malformed activities document".into()));
        }
        Ok(self.activities.lock().clone())
    }

    fn save_activities(&self, activities: &[Activity]) -> DomainResult<()> {
        *self.activities.lock() = Some(activities.to_vec());
        Ok(())
    }

    fn load_achievements(&self) -> DomainResult<Option<Vec<Achievement>>> {
        Ok(self.achievements.lock().clone())
    }

    fn save_achievements(&self, achievements: &[Achievement]) -> DomainResult<()> {
        *self.achievements.lock() = Some(achievements.to_vec());
        Ok(())
    }

    fn load_user_stats(&self) -> DomainResult<Option<UserStats>> {
        Ok(self.stats.lock().clone())
    }

    fn save_user_stats(&self, stats: &UserStats) -> DomainResult<()> {
        *self.stats.lock() = Some(stats.clone());
        Ok(())
    }
}

/// Observer that records every event it receives.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<StoreEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StoreEvent> {
        self.events.lock().clone()
    }

    /// Titles of the unlock events seen so far.
    pub fn unlocked_titles(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                StoreEvent::AchievementUnlocked { title, .. } => Some(title.clone()),
                _ => None,
            })
            .collect()
    }
}

impl StoreObserver for RecordingObserver {
    fn notify(&self, event: &StoreEvent) {
        self.events.lock().push(event.clone());
    }
}

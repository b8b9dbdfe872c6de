//! Port interfaces for the carbon state store
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations. All operations are synchronous:
//! the store runs single-threaded and every mutation completes before
//! control returns to the caller.

use ecotrace_domain::{Achievement, Activity, Result, UserStats};

use super::events::StoreEvent;

/// Trait for persisting the store's three durable records
///
/// Each record is loaded and saved independently. `load_*` returns
/// `Ok(None)` when no record exists and an error when a record exists but
/// cannot be decoded; the store falls back to seed data in both cases.
pub trait StateRepository: Send + Sync {
    /// Load the persisted activity sequence (newest first)
    fn load_activities(&self) -> Result<Option<Vec<Activity>>>;

    /// Replace the persisted activity sequence
    fn save_activities(&self, activities: &[Activity]) -> Result<()>;

    /// Load the persisted achievement collection
    fn load_achievements(&self) -> Result<Option<Vec<Achievement>>>;

    /// Replace the persisted achievement collection
    fn save_achievements(&self, achievements: &[Achievement]) -> Result<()>;

    /// Load the persisted user stats record
    fn load_user_stats(&self) -> Result<Option<UserStats>>;

    /// Replace the persisted user stats record
    fn save_user_stats(&self, stats: &UserStats) -> Result<()>;
}

/// Trait for receiving store events after a committed mutation
///
/// Observers are notified outside the store's state lock, in registration
/// order, once per event.
pub trait StoreObserver: Send + Sync {
    /// Handle a single store event
    fn notify(&self, event: &StoreEvent);
}

//! Tracing-backed notification observer
//!
//! Stands in for the UI toast layer: unlock and activity notifications
//! become structured log events.

use ecotrace_core::{StoreEvent, StoreObserver};
use tracing::info;

/// Observer that logs every store notification
pub struct LogNotifier;

impl StoreObserver for LogNotifier {
    fn notify(&self, event: &StoreEvent) {
        match event {
            StoreEvent::ActivityLogged { name, category, .. } => {
                info!(name = %name, category = %category, "activity_logged");
            }
            StoreEvent::AchievementUnlocked { title, points, .. } => {
                info!(title = %title, points, "achievement_unlocked");
            }
        }
    }
}

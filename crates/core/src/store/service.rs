//! Carbon state store service - core business logic

use std::sync::Arc;

use chrono::Utc;
use ecotrace_domain::constants::{PROGRESS_INCREMENT, SAVED_EMISSIONS_FACTOR};
use ecotrace_domain::seed::{
    default_user_profile, default_user_stats, seed_achievements, seed_activities,
};
use ecotrace_domain::{
    Achievement, Activity, DayBucket, EcoTraceError, NewActivity, Result, UserProfile, UserStats,
};
use parking_lot::RwLock;
use tracing::{debug, error, warn};

use super::events::StoreEvent;
use super::ports::{StateRepository, StoreObserver};
use super::transitions;

/// Canonical store state plus its derived views
///
/// Derived fields are refreshed inside the same write-lock scope as every
/// mutation, so readers never observe a partially-updated aggregate.
struct StoreState {
    activities: Vec<Activity>,
    achievements: Vec<Achievement>,
    profile: UserProfile,
    stats: UserStats,
    total_emissions: f64,
    weekly: Vec<DayBucket>,
}

impl StoreState {
    fn refresh_derived(&mut self) {
        self.total_emissions = transitions::total_emissions(&self.activities);
        self.weekly = transitions::weekly_series(&self.activities);
    }

    /// The achievement-progress procedure: clamp, re-derive completion,
    /// award points exactly once on the incomplete -> complete transition.
    ///
    /// Returns the unlock event when this update crossed the threshold.
    fn apply_achievement_progress(&mut self, id: &str, new_progress: f64) -> Option<StoreEvent> {
        let achievement = self.achievements.iter_mut().find(|a| a.id == id)?;
        if achievement.is_completed {
            // Completed is terminal: no regression, no re-award
            return None;
        }

        let update = transitions::apply_progress(achievement, new_progress);
        let newly_completed = update.newly_completed;
        let title = update.achievement.title.clone();
        let points = update.achievement.points;
        *achievement = update.achievement;

        if newly_completed {
            self.profile.points += points;
            return Some(StoreEvent::AchievementUnlocked { id: id.to_string(), title, points });
        }
        None
    }
}

/// Single source of truth for activities, achievements, profile and stats
///
/// Constructed once at startup from the storage port (falling back to seed
/// data per record) and shared by reference with every consumer. All
/// mutations run synchronously to completion; observers are notified after
/// the state lock is released.
pub struct CarbonStore {
    state: RwLock<StoreState>,
    repository: Arc<dyn StateRepository>,
    observers: Vec<Arc<dyn StoreObserver>>,
}

impl CarbonStore {
    /// Open the store, loading each persisted record independently
    ///
    /// A record that is absent or cannot be decoded falls back to its seed
    /// default; the profile always resets to the default record.
    pub fn open(repository: Arc<dyn StateRepository>) -> Self {
        let now = Utc::now();

        let activities =
            load_or_seed("activities", repository.load_activities(), || seed_activities(now));
        let achievements =
            load_or_seed("achievements", repository.load_achievements(), seed_achievements);
        let stats = load_or_seed("user_stats", repository.load_user_stats(), default_user_stats);

        let mut state = StoreState {
            activities,
            achievements,
            profile: default_user_profile(),
            stats,
            total_emissions: 0.0,
            weekly: Vec::new(),
        };
        state.refresh_derived();

        Self { state: RwLock::new(state), repository, observers: Vec::new() }
    }

    /// Register an observer for store events
    pub fn with_observer(mut self, observer: Arc<dyn StoreObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Record a new activity
    ///
    /// Prepends the activity (newest first), recomputes the derived views,
    /// advances every matching incomplete achievement by the fixed
    /// increment, updates the usage stats and persists the affected
    /// records. Persistence is best-effort and never surfaced.
    ///
    /// # Errors
    /// Returns `EcoTraceError::InvalidInput` for an empty name or a
    /// non-finite/negative emissions value; nothing is mutated in that case.
    pub fn add_activity(&self, input: NewActivity) -> Result<()> {
        input.validate()?;

        let mut events = Vec::new();
        {
            let mut state = self.state.write();

            let activity = Activity::record(input, Utc::now());
            let logged = StoreEvent::ActivityLogged {
                id: activity.id.clone(),
                name: activity.name.clone(),
                category: activity.category.label().to_string(),
            };
            let category = activity.category.label();
            let emissions = activity.emissions;

            state.activities.insert(0, activity);
            state.refresh_derived();

            // Advance every incomplete achievement in the same category,
            // one atomic progress procedure per achievement
            let advances: Vec<(String, f64)> = state
                .achievements
                .iter()
                .filter(|a| !a.is_completed && a.matches_category(category))
                .map(|a| (a.id.clone(), a.progress + PROGRESS_INCREMENT))
                .collect();
            let achievements_touched = !advances.is_empty();
            for (id, target) in advances {
                events.extend(state.apply_achievement_progress(&id, target));
            }

            state.stats.total_activities += 1;
            state.stats.saved_emissions += SAVED_EMISSIONS_FACTOR * emissions;

            self.persist_activities(&state.activities);
            self.persist_user_stats(&state.stats);
            if achievements_touched {
                self.persist_achievements(&state.achievements);
            }

            events.push(logged);
        }

        self.notify_observers(&events);
        Ok(())
    }

    /// Set an achievement's progress
    ///
    /// Unknown ids are ignored. The value is clamped to [0, 100]; the
    /// incomplete -> complete transition awards the achievement's points
    /// and emits one unlock event. Completed achievements are terminal, so
    /// re-applying a saturated value is a no-op.
    ///
    /// # Errors
    /// Returns `EcoTraceError::InvalidInput` for a non-finite value.
    pub fn update_achievement_progress(&self, id: &str, new_progress: f64) -> Result<()> {
        if !new_progress.is_finite() {
            return Err(EcoTraceError::InvalidInput(format!(
                "achievement progress must be a finite number, got {new_progress}"
            )));
        }

        let mut events = Vec::new();
        {
            let mut state = self.state.write();

            if !state.achievements.iter().any(|a| a.id == id) {
                debug!(achievement_id = id, "ignoring progress update for unknown achievement");
                return Ok(());
            }

            events.extend(state.apply_achievement_progress(id, new_progress));
            self.persist_achievements(&state.achievements);
        }

        self.notify_observers(&events);
        Ok(())
    }

    /// Activity sequence, newest first
    pub fn activities(&self) -> Vec<Activity> {
        self.state.read().activities.clone()
    }

    /// Achievement collection
    pub fn achievements(&self) -> Vec<Achievement> {
        self.state.read().achievements.clone()
    }

    /// The local user's profile
    pub fn user_profile(&self) -> UserProfile {
        self.state.read().profile.clone()
    }

    /// Aggregate usage statistics
    pub fn user_stats(&self) -> UserStats {
        self.state.read().stats.clone()
    }

    /// Sum of emissions across all activities, kg CO2e
    pub fn total_emissions(&self) -> f64 {
        self.state.read().total_emissions
    }

    /// Weekly emissions series, one bucket per weekday
    pub fn weekly_emissions(&self) -> Vec<DayBucket> {
        self.state.read().weekly.clone()
    }

    fn persist_activities(&self, activities: &[Activity]) {
        if let Err(err) = self.repository.save_activities(activities) {
            error!(error = %err, "failed to persist activity log");
        }
    }

    fn persist_achievements(&self, achievements: &[Achievement]) {
        if let Err(err) = self.repository.save_achievements(achievements) {
            error!(error = %err, "failed to persist achievements");
        }
    }

    fn persist_user_stats(&self, stats: &UserStats) {
        if let Err(err) = self.repository.save_user_stats(stats) {
            error!(error = %err, "failed to persist user stats");
        }
    }

    fn notify_observers(&self, events: &[StoreEvent]) {
        for event in events {
            for observer in &self.observers {
                observer.notify(event);
            }
        }
    }
}

fn load_or_seed<T>(
    record: &'static str,
    loaded: Result<Option<T>>,
    seed: impl FnOnce() -> T,
) -> T {
    match loaded {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!(record, "no persisted record, using seed defaults");
            seed()
        }
        Err(err) => {
            warn!(record, error = %err, "unreadable persisted record, using seed defaults");
            seed()
        }
    }
}

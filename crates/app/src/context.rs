//! Application context - dependency injection container
//!
//! Constructs the store exactly once at process start; everything that
//! needs it receives a reference from here. Initialization failures fail
//! fast instead of leaving consumers with a half-built store.

use std::sync::Arc;

use ecotrace_core::CarbonStore;
use ecotrace_domain::{Config, Result};
use ecotrace_infra::{DbManager, SqliteStateRepository};
use tracing::info;

use crate::notifier::LogNotifier;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub db: Arc<DbManager>,
    pub store: Arc<CarbonStore>,
}

impl AppContext {
    /// Build the full dependency graph from configuration
    ///
    /// # Errors
    /// Returns an error when the database cannot be opened, migrated or
    /// health-checked.
    pub fn new(config: Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path)?);
        db.run_migrations()?;
        db.health_check()?;

        let repository = Arc::new(SqliteStateRepository::new(db.clone()));
        let mut store = CarbonStore::open(repository);
        if config.notifications.enabled {
            store = store.with_observer(Arc::new(LogNotifier));
        }

        info!(db_path = %config.database.path, "application context initialized");

        Ok(Self { config, db, store: Arc::new(store) })
    }
}

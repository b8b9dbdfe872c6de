//! SQLite-backed state repository
//!
//! Persists the store's three durable records as JSON documents in the
//! `state_documents` table, one row per record key.

use std::sync::Arc;

use chrono::Utc;
use ecotrace_core::StateRepository;
use ecotrace_domain::constants::{ACHIEVEMENTS_KEY, ACTIVITIES_KEY, USER_STATS_KEY};
use ecotrace_domain::{
    Achievement, Activity, EcoTraceError, Result as DomainResult, UserStats,
};
use rusqlite::params;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::manager::{map_sql_error, DbManager};

/// SQLite-backed implementation of `StateRepository`
pub struct SqliteStateRepository {
    db: Arc<DbManager>,
}

impl SqliteStateRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    fn load_document<T: DeserializeOwned>(&self, key: &str) -> DomainResult<Option<T>> {
        let body = {
            let conn = self.db.connection();
            let result = conn.query_row(
                "SELECT body FROM state_documents WHERE doc_key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            );

            match result {
                Ok(body) => body,
                Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
                Err(err) => return Err(map_sql_error(err)),
            }
        };

        let value = serde_json::from_str(&body).map_err(|err| {
            EcoTraceError::Database(format!("malformed {key} document: {err}"))
        })?;
        Ok(Some(value))
    }

    fn save_document<T: Serialize>(&self, key: &str, value: &T) -> DomainResult<()> {
        let body = serde_json::to_string(value).map_err(|err| {
            EcoTraceError::Internal(format!("failed to encode {key} document: {err}"))
        })?;
        let now = Utc::now().timestamp();

        self.db
            .connection()
            .execute(
                "INSERT INTO state_documents (doc_key, body, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(doc_key) DO UPDATE SET
                    body = excluded.body,
                    updated_at = excluded.updated_at",
                params![key, body, now],
            )
            .map_err(map_sql_error)?;
        Ok(())
    }
}

impl StateRepository for SqliteStateRepository {
    fn load_activities(&self) -> DomainResult<Option<Vec<Activity>>> {
        self.load_document(ACTIVITIES_KEY)
    }

    fn save_activities(&self, activities: &[Activity]) -> DomainResult<()> {
        self.save_document(ACTIVITIES_KEY, &activities)
    }

    fn load_achievements(&self) -> DomainResult<Option<Vec<Achievement>>> {
        self.load_document(ACHIEVEMENTS_KEY)
    }

    fn save_achievements(&self, achievements: &[Achievement]) -> DomainResult<()> {
        self.save_document(ACHIEVEMENTS_KEY, &achievements)
    }

    fn load_user_stats(&self) -> DomainResult<Option<UserStats>> {
        self.load_document(USER_STATS_KEY)
    }

    fn save_user_stats(&self, stats: &UserStats) -> DomainResult<()> {
        self.save_document(USER_STATS_KEY, stats)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ecotrace_domain::seed::{default_user_stats, seed_activities};
    use tempfile::TempDir;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let manager = DbManager::new(&db_path).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        (Arc::new(manager), temp_dir)
    }

    #[test]
    fn absent_documents_load_as_none() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteStateRepository::new(db);

        assert!(repo.load_activities().expect("load").is_none());
        assert!(repo.load_achievements().expect("load").is_none());
        assert!(repo.load_user_stats().expect("load").is_none());
    }

    #[test]
    fn activity_sequence_round_trips_unchanged() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteStateRepository::new(db);

        let activities = seed_activities(Utc::now());
        repo.save_activities(&activities).expect("save");

        let loaded = repo.load_activities().expect("load").expect("present");
        assert_eq!(loaded, activities);
    }

    #[test]
    fn saves_replace_the_previous_document() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteStateRepository::new(db);

        let mut stats = default_user_stats();
        repo.save_user_stats(&stats).expect("save");

        stats.total_activities += 1;
        repo.save_user_stats(&stats).expect("save again");

        let loaded = repo.load_user_stats().expect("load").expect("present");
        assert_eq!(loaded.total_activities, stats.total_activities);
    }

    #[test]
    fn malformed_document_surfaces_a_database_error() {
        let (db, _temp_dir) = setup_test_db();

        db.connection()
            .execute(
                "INSERT INTO state_documents (doc_key, body, updated_at) VALUES (?1, ?2, 0)",
                params![ACTIVITIES_KEY, "not valid json"],
            )
            .expect("insert corrupt document");

        let repo = SqliteStateRepository::new(db);
        let err = repo.load_activities().expect_err("corrupt document rejected");
        assert!(matches!(err, EcoTraceError::Database(_)));
    }
}

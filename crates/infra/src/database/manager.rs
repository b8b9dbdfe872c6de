//! Database connection manager for the local SQLite store.
//!
//! The store is single-threaded by design, so a single connection behind a
//! mutex replaces a pool.

use std::path::{Path, PathBuf};

use ecotrace_domain::{EcoTraceError, Result};
use parking_lot::{Mutex, MutexGuard};
use rusqlite::{params, Connection};
use tracing::info;

const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Database manager owning the process-wide SQLite connection.
pub struct DbManager {
    conn: Mutex<Connection>,
    path: PathBuf,
}

impl DbManager {
    /// Open (or create) the database at the given path.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(map_sql_error)?;

        info!(db_path = %path.display(), "sqlite connection opened");

        Ok(Self { conn: Mutex::new(conn), path })
    }

    /// Acquire the connection.
    pub fn connection(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }

    /// Ensure the full schema exists on the current database.
    pub fn run_migrations(&self) -> Result<()> {
        let conn = self.connection();
        conn.execute_batch(SCHEMA_SQL).map_err(map_sql_error)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?, CAST(strftime('%s','now') AS INTEGER))",
            params![SCHEMA_VERSION],
        )
        .map_err(map_sql_error)?;
        Ok(())
    }

    /// Return the configured database path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Perform a health check to verify database connectivity.
    pub fn health_check(&self) -> Result<()> {
        self.connection()
            .query_row("SELECT 1", params![], |row| row.get::<_, i32>(0))
            .map_err(map_sql_error)?;
        Ok(())
    }
}

pub(crate) fn map_sql_error(err: rusqlite::Error) -> EcoTraceError {
    EcoTraceError::Database(format!("SQLite error: {err}"))
}

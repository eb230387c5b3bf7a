//! Store handle bound to one database file.
//!
//! # Responsibility
//! - Remember where the roster database lives.
//! - Hand out short-lived connections, one per operation.
//!
//! # Invariants
//! - No connection outlives the closure it was acquired for.
//! - Connections are closed on every exit path, including failures.

use super::open::{connect, open_db};
use super::{DbError, DbResult};
use crate::config::DEFAULT_DB_FILE_NAME;
use log::{info, warn};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Location of the backing SQLite file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the fixed, well-known file name in the working directory.
    pub fn at_default_location() -> Self {
        Self::new(DEFAULT_DB_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection without touching the schema.
    ///
    /// # Errors
    /// - `DbError::Connection` when the file cannot be opened or created.
    pub fn connect(&self) -> DbResult<Connection> {
        connect(&self.path)
    }

    /// Creates the `students` table when absent.
    ///
    /// Safe to call on every startup; an up-to-date file is left untouched.
    pub fn ensure_schema(&self) -> DbResult<()> {
        let conn = open_db(&self.path)?;
        release(conn);
        info!(
            "event=schema_ready module=db status=ok path={}",
            self.path.display()
        );
        Ok(())
    }

    /// Runs `f` against a connection scoped to this call.
    ///
    /// The connection is acquired before `f` runs and closed after it
    /// returns, whatever the outcome.
    pub fn with_connection<T, E>(&self, f: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let conn = self.connect()?;
        let result = f(&conn);
        release(conn);
        result
    }
}

fn release(conn: Connection) {
    if let Err((_conn, err)) = conn.close() {
        // Dropping the returned handle still finalizes it.
        warn!("event=db_close module=db status=error error={err}");
    }
}

#[cfg(test)]
mod tests {
    use super::Store;
    use crate::db::{DbError, DbResult};

    #[test]
    fn default_location_uses_fixed_file_name() {
        let store = Store::at_default_location();
        assert_eq!(store.path().to_str(), Some("students.db"));
    }

    #[test]
    fn with_connection_propagates_closure_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("scoped.db"));

        let result = store.with_connection(|conn| -> DbResult<()> {
            conn.execute_batch("SELECT * FROM missing_table;")?;
            Ok(())
        });
        assert!(matches!(result, Err(DbError::Sqlite(_))));
    }
}

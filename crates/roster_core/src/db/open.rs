//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file-backed SQLite connections with the pragmas core relies on.
//! - Run schema migrations when a caller asks for a migrated handle.
//!
//! # Invariants
//! - Open failures are reported as `DbError::Connection`.
//! - Every open attempt emits one `db_open` log event with its outcome.

use super::migrations::apply_migrations;
use super::{DbError, DbResult};
use log::{debug, error};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens a plain connection to the database file, creating it if missing.
///
/// The schema is not touched; see [`open_db`] for a migrated handle.
pub fn connect(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let conn = Connection::open(path)
        .and_then(|conn| {
            conn.busy_timeout(BUSY_TIMEOUT)?;
            Ok(conn)
        })
        .map_err(|source| {
            error!(
                "event=db_open module=db status=error duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                source
            );
            DbError::Connection {
                path: path.to_path_buf(),
                source,
            }
        })?;

    debug!(
        "event=db_open module=db status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

/// Opens the database file and applies all pending migrations.
///
/// # Side effects
/// - Creates the file and the `students` table when absent.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mut conn = connect(path)?;

    if let Err(err) = apply_migrations(&mut conn) {
        error!(
            "event=db_migrate module=db status=error duration_ms={} error_code=db_bootstrap_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Err(err);
    }

    debug!(
        "event=db_migrate module=db status=ok duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(conn)
}

//! Schema history of the roster database.
//!
//! Version 1 is the single `students` table. It is written with
//! `CREATE TABLE IF NOT EXISTS` because `students.db` files made by the
//! earlier menu program already hold that exact table at `user_version = 0`;
//! applying version 1 to them only stamps the version.
//!
//! Any later column change gets its own numbered SQL file appended to
//! `MIGRATIONS`, applied in one transaction with the version bump. A file
//! stamped newer than this binary is refused rather than guessed at.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_students.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings the file up to `latest_version()`.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file is stamped newer than this
///   binary; nothing is written in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stamped = stamped_version(conn)?;
    let latest = latest_version();

    match stamped.cmp(&latest) {
        Ordering::Greater => {
            return Err(DbError::UnsupportedSchemaVersion {
                db_version: stamped,
                latest_supported: latest,
            })
        }
        Ordering::Equal => return Ok(()),
        Ordering::Less => {}
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().skip_while(|m| m.version <= stamped) {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        info!(
            "event=db_migrate module=db status=applied from={} to={}",
            stamped, migration.version
        );
    }
    tx.commit()?;

    Ok(())
}

fn stamped_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?;
    Ok(version)
}

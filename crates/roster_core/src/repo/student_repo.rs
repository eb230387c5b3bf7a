//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert/get/list/update/delete over the `students` table.
//! - Convert every store failure into a `RepoError` value.
//!
//! # Invariants
//! - Each call runs on its own connection, released before returning.
//! - Primary-key conflicts surface as `RepoError::DuplicateKey`.
//! - Rows are read back as stored; only writes enforce `validate()`, so a
//!   legacy row with an empty name still lists, loads and can be fixed.

use crate::db::{DbError, Store};
use crate::model::student::{RecordValidationError, StudentId, StudentRecord};
use rusqlite::{params, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_SELECT_SQL: &str = "SELECT
    id,
    firstName,
    lastName,
    age,
    gender,
    combination
FROM students";

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure of a repository operation.
#[derive(Debug)]
pub enum RepoError {
    Validation(RecordValidationError),
    Db(DbError),
    /// Insert targeted an id that already exists.
    DuplicateKey(StudentId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateKey(id) => write!(f, "student with ID {id} already exists"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateKey(_) => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for student CRUD operations.
pub trait StudentRepository {
    fn insert(&self, record: &StudentRecord) -> RepoResult<()>;
    fn get_by_id(&self, id: StudentId) -> RepoResult<Option<StudentRecord>>;
    fn get_all(&self) -> RepoResult<Vec<StudentRecord>>;
    /// Returns the number of rows changed (0 when `record.id` is absent).
    fn update(&self, record: &StudentRecord) -> RepoResult<usize>;
    /// Returns the number of rows removed (0 when `id` is absent).
    fn delete(&self, id: StudentId) -> RepoResult<usize>;
}

/// SQLite-backed student repository.
///
/// Holds only the store location; connections are opened per call.
#[derive(Debug, Clone)]
pub struct SqliteStudentRepository {
    store: Store,
}

impl SqliteStudentRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

impl StudentRepository for SqliteStudentRepository {
    fn insert(&self, record: &StudentRecord) -> RepoResult<()> {
        record.validate()?;

        self.store.with_connection(|conn| -> RepoResult<_> {
            conn.execute(
                "INSERT INTO students (
                    id,
                    firstName,
                    lastName,
                    age,
                    gender,
                    combination
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    record.id,
                    record.first_name.as_str(),
                    record.last_name.as_str(),
                    record.age,
                    record.gender.as_str(),
                    record.combination.as_str(),
                ],
            )
            .map_err(|err| {
                if is_primary_key_conflict(&err) {
                    RepoError::DuplicateKey(record.id)
                } else {
                    err.into()
                }
            })?;
            Ok(())
        })
    }

    fn get_by_id(&self, id: StudentId) -> RepoResult<Option<StudentRecord>> {
        self.store.with_connection(|conn| -> RepoResult<_> {
            let mut stmt = conn.prepare(&format!("{STUDENT_SELECT_SQL} WHERE id = ?1;"))?;
            let mut rows = stmt.query([id])?;
            let record = match rows.next()? {
                Some(row) => Some(parse_student_row(row)?),
                None => None,
            };
            Ok(record)
        })
    }

    fn get_all(&self) -> RepoResult<Vec<StudentRecord>> {
        self.store.with_connection(|conn| -> RepoResult<_> {
            let mut stmt = conn.prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
            let mut rows = stmt.query([])?;
            let mut records = Vec::new();

            while let Some(row) = rows.next()? {
                records.push(parse_student_row(row)?);
            }

            Ok(records)
        })
    }

    fn update(&self, record: &StudentRecord) -> RepoResult<usize> {
        record.validate()?;

        self.store.with_connection(|conn| -> RepoResult<_> {
            let changed = conn.execute(
                "UPDATE students
                 SET
                    firstName = ?1,
                    lastName = ?2,
                    age = ?3,
                    gender = ?4,
                    combination = ?5
                 WHERE id = ?6;",
                params![
                    record.first_name.as_str(),
                    record.last_name.as_str(),
                    record.age,
                    record.gender.as_str(),
                    record.combination.as_str(),
                    record.id,
                ],
            )?;
            Ok(changed)
        })
    }

    fn delete(&self, id: StudentId) -> RepoResult<usize> {
        self.store.with_connection(|conn| -> RepoResult<_> {
            let changed = conn.execute("DELETE FROM students WHERE id = ?1;", [id])?;
            Ok(changed)
        })
    }
}

fn is_primary_key_conflict(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == ErrorCode::ConstraintViolation
                && matches!(
                    failure.extended_code,
                    rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                        | rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}

// Columns written by older tools may be NULL; they read back as empty text
// or zero age rather than failing the whole listing.
fn parse_student_row(row: &Row<'_>) -> RepoResult<StudentRecord> {
    Ok(StudentRecord {
        id: row.get("id")?,
        first_name: row.get("firstName")?,
        last_name: row.get("lastName")?,
        age: row.get::<_, Option<i64>>("age")?.unwrap_or_default(),
        gender: row.get::<_, Option<String>>("gender")?.unwrap_or_default(),
        combination: row
            .get::<_, Option<String>>("combination")?
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::is_primary_key_conflict;
    use rusqlite::Connection;

    #[test]
    fn primary_key_conflict_is_recognized() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY); INSERT INTO t VALUES (1);")
            .unwrap();

        let err = conn.execute("INSERT INTO t VALUES (1);", []).unwrap_err();
        assert!(is_primary_key_conflict(&err));

        let other = conn.execute("INSERT INTO missing VALUES (1);", []).unwrap_err();
        assert!(!is_primary_key_conflict(&other));
    }
}

//! Student record model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the `students` table.
//! - Validate field-level invariants before persistence.
//!
//! # Invariants
//! - `id` is chosen by the caller and never generated by the store.
//! - `first_name` and `last_name` are non-empty after trimming.
//! - `age` has no enforced range.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Primary key of a student row.
pub type StudentId = i64;

/// Validation failures for [`StudentRecord`] invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField(&'static str),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
        }
    }
}

impl Error for RecordValidationError {}

/// One student's persisted data.
///
/// Name, age and gender are inlined here rather than split into a separate
/// person type; nothing dispatches over that distinction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StudentRecordWire")]
pub struct StudentRecord {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub gender: String,
    /// Academic subject track, free text (e.g. `PCM`).
    pub combination: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentRecordWire {
    id: StudentId,
    first_name: String,
    last_name: String,
    age: i64,
    gender: String,
    combination: String,
}

impl TryFrom<StudentRecordWire> for StudentRecord {
    type Error = RecordValidationError;

    fn try_from(value: StudentRecordWire) -> Result<Self, Self::Error> {
        let record = Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            age: value.age,
            gender: value.gender,
            combination: value.combination,
        };
        record.validate()?;
        Ok(record)
    }
}

impl StudentRecord {
    /// Builds a record from its six fields without validating them.
    ///
    /// Call [`StudentRecord::validate`] (or let the repository do it) before
    /// relying on the name invariants.
    pub fn new(
        id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: i64,
        gender: impl Into<String>,
        combination: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            gender: gender.into(),
            combination: combination.into(),
        }
    }

    /// Checks field-level invariants.
    ///
    /// # Errors
    /// - `EmptyField("first_name")` / `EmptyField("last_name")` when a name is
    ///   blank.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(RecordValidationError::EmptyField("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(RecordValidationError::EmptyField("last_name"));
        }
        Ok(())
    }
}

impl Display for StudentRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {} {}, Age: {}, Gender: {}, Combination: {}",
            self.id, self.first_name, self.last_name, self.age, self.gender, self.combination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordValidationError, StudentRecord};

    #[test]
    fn whitespace_only_last_name_is_rejected() {
        let record = StudentRecord::new(7, "Ana", "   ", 20, "F", "PCM");
        assert_eq!(
            record.validate(),
            Err(RecordValidationError::EmptyField("last_name"))
        );
    }

    #[test]
    fn display_renders_single_summary_line() {
        let record = StudentRecord::new(1, "Ana", "Doe", 20, "F", "PCM");
        assert_eq!(
            record.to_string(),
            "ID: 1, Name: Ana Doe, Age: 20, Gender: F, Combination: PCM"
        );
    }
}

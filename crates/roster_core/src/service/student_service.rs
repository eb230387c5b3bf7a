//! Student use-case service.
//!
//! # Responsibility
//! - Provide the CRUD entry points used by the interactive session.
//! - Turn affected-row counts into explicit outcomes.
//! - Emit one log event per operation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - A missing target is reported as `ChangeOutcome::NotFound`, not an error.

use crate::model::student::{StudentId, StudentRecord};
use crate::repo::student_repo::{RepoResult, StudentRepository};
use log::{info, warn};

/// Result of an update or delete that completed without a store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    Applied,
    NotFound(StudentId),
}

impl ChangeOutcome {
    fn from_affected(id: StudentId, affected: usize) -> Self {
        if affected == 0 {
            Self::NotFound(id)
        } else {
            Self::Applied
        }
    }
}

/// Use-case service wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Inserts a new student with its caller-chosen id.
    pub fn register(&self, record: &StudentRecord) -> RepoResult<()> {
        let result = self.repo.insert(record);
        log_result("student_insert", record.id, &result);
        result
    }

    pub fn find(&self, id: StudentId) -> RepoResult<Option<StudentRecord>> {
        let result = self.repo.get_by_id(id);
        log_result("student_get", id, &result);
        result
    }

    pub fn list(&self) -> RepoResult<Vec<StudentRecord>> {
        let result = self.repo.get_all();
        match &result {
            Ok(records) => info!(
                "event=student_list module=service status=ok count={}",
                records.len()
            ),
            Err(err) => warn!("event=student_list module=service status=error error={err}"),
        }
        result
    }

    /// Replaces every field except the id.
    pub fn update(&self, record: &StudentRecord) -> RepoResult<ChangeOutcome> {
        let result = self
            .repo
            .update(record)
            .map(|affected| ChangeOutcome::from_affected(record.id, affected));
        log_result("student_update", record.id, &result);
        result
    }

    pub fn remove(&self, id: StudentId) -> RepoResult<ChangeOutcome> {
        let result = self
            .repo
            .delete(id)
            .map(|affected| ChangeOutcome::from_affected(id, affected));
        log_result("student_delete", id, &result);
        result
    }
}

fn log_result<T>(event: &str, id: StudentId, result: &RepoResult<T>) {
    match result {
        Ok(_) => info!("event={event} module=service status=ok id={id}"),
        Err(err) => warn!("event={event} module=service status=error id={id} error={err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::ChangeOutcome;

    #[test]
    fn zero_affected_rows_maps_to_not_found() {
        assert_eq!(ChangeOutcome::from_affected(4, 0), ChangeOutcome::NotFound(4));
        assert_eq!(ChangeOutcome::from_affected(4, 1), ChangeOutcome::Applied);
    }
}

//! Core domain logic for the student roster.
//! This crate owns the record invariants, the SQLite store and the
//! interactive menu that drives them.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use config::AppConfig;
pub use db::{DbError, DbResult, Store};
pub use logging::{default_log_level, init_logging};
pub use model::student::{RecordValidationError, StudentId, StudentRecord};
pub use repo::student_repo::{RepoError, RepoResult, SqliteStudentRepository, StudentRepository};
pub use service::student_service::{ChangeOutcome, StudentService};
pub use session::{InputParseError, InteractiveSession, MenuChoice};


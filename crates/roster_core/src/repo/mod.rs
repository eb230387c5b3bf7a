//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record-level CRUD contract.
//! - Isolate SQLite query details from service and session code.
//!
//! # Invariants
//! - Write paths call `StudentRecord::validate()` before SQL mutations;
//!   read paths return rows as stored.
//! - A missing row is an ordinary result (`None` or a zero count), never an
//!   error.

pub mod student_repo;

//! Domain model for the student roster.
//!
//! # Responsibility
//! - Define the single record shape persisted by the store.
//!
//! # Invariants
//! - Every record is identified by a caller-supplied `StudentId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod student;

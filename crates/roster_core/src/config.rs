//! Fixed runtime configuration.
//!
//! The roster takes no flags, environment variables or config files; every
//! location is a constant resolved here.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Database file name, relative to the working directory.
pub const DEFAULT_DB_FILE_NAME: &str = "students.db";
const LOG_DIR_NAME: &str = "student-roster-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_dir: std::env::temp_dir().join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }
}

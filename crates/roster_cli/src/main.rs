//! Interactive entry point for the student roster.
//!
//! # Responsibility
//! - Start file logging and hand the terminal to the menu loop.
//! - Always exit with status 0.

use log::error;
use roster_core::{init_logging, AppConfig, InteractiveSession, Store};
use std::io;

fn main() {
    let config = AppConfig::default();

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = InteractiveSession::new(
        Store::new(config.db_path),
        stdin.lock(),
        stdout.lock(),
    );

    if let Err(err) = session.run() {
        error!("event=session_end module=cli status=error error={err}");
        eprintln!("terminal error: {err}");
    }
}

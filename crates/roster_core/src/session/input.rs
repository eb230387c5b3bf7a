//! Line-oriented input parsing for the interactive menu.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Non-integer text entered where a whole number is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParseError {
    input: String,
}

impl InputParseError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for InputParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid number: '{}'. Please enter a whole number.",
            self.input
        )
    }
}

impl Error for InputParseError {}

/// Parses a signed whole number, ignoring surrounding whitespace.
pub fn parse_whole_number(text: &str) -> Result<i64, InputParseError> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| InputParseError {
        input: trimmed.to_string(),
    })
}

/// Top-level menu commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    ViewAll,
    ViewOne,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Returns `None` for anything that is not a menu command.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(Self::Insert),
            "2" => Some(Self::ViewAll),
            "3" => Some(Self::ViewOne),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "q" => Some(Self::Exit),
            _ => None,
        }
    }
}

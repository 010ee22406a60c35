//! Core data structure for the notepad application.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::current_timestamp;

/// `strftime` pattern of a note timestamp, e.g. `15-03-2024 09:41:07`.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// `strftime` pattern accepted by the date filter, e.g. `15-03-2024`.
pub const DATE_FILTER_FORMAT: &str = "%d-%m-%Y";

/// Represents a single note in our system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Display identifier, assigned when the note is added
    pub id: u64,
    /// Note title
    pub title: String,
    /// Note body, may be empty or span several lines
    pub message: String,
    /// Local time of creation or of the last edit, in [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
}

impl Note {
    /// Creates a new note stamped with the current local time
    pub fn new(id: u64, title: String, message: String) -> Self {
        Note {
            id,
            title,
            message,
            timestamp: current_timestamp(),
        }
    }

    /// Replaces title and message and refreshes the timestamp.
    pub fn rewrite(&mut self, title: String, message: String) {
        self.title = title;
        self.message = message;
        self.timestamp = current_timestamp();
    }

    /// Whether the note was created or last edited on `date` (`DD-MM-YYYY`).
    ///
    /// This is a plain prefix match on the formatted timestamp.
    pub fn is_on_date(&self, date: &str) -> bool {
        self.timestamp.starts_with(date)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. {} ({})", self.id, self.title, self.timestamp)?;
        write!(f, "{}", self.message)
    }
}

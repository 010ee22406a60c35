//! Small helpers shared by the store and the command-line front ends.
use std::{fs, path::Path};

use chrono::{Local, NaiveDate};
use log::{debug, error, trace};

use crate::{Note, NotesError, Result, DATE_FILTER_FORMAT, TIMESTAMP_FORMAT};

/// Current local time formatted as a note timestamp
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Checks that `input` is a real calendar date written exactly as `DD-MM-YYYY`.
///
/// chrono accepts single-digit days and months, so the shape is checked first.
pub fn validate_filter_date(input: &str) -> Result<()> {
    let bytes = input.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_shaped || NaiveDate::parse_from_str(input, DATE_FILTER_FORMAT).is_err() {
        debug!("Rejected filter date: {:?}", input);
        return Err(NotesError::InvalidDateFormat {
            input: input.to_string(),
        });
    }

    Ok(())
}

/// Parses a note id typed by the user
pub fn parse_note_id(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    trimmed.parse::<u64>().map_err(|_| NotesError::InvalidInput {
        message: format!("'{}' is not a valid note ID", trimmed),
    })
}

/// Helper method to load the whole note list from the backing file
pub fn load_notes_from_file(path: &Path) -> Result<Vec<Note>> {
    debug!("Loading notes from file: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| {
        error!("Failed to open notes file {}: {}", path.display(), e);
        NotesError::Io(e)
    })?;

    let notes: Vec<Note> = serde_json::from_str(&content).map_err(|e| {
        error!("Notes file {} is malformed: {}", path.display(), e);
        NotesError::MalformedStore {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    trace!("Parsed {} notes from {}", notes.len(), path.display());
    Ok(notes)
}

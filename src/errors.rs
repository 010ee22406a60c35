//! Error types for the notepad application.
//!
//! This module defines the error type shared by the note store, the
//! configuration layer and the command-line front ends.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the notepad application.
#[derive(Error, Debug)]
pub enum NotesError {
    /// Errors related to file or console I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file exists but is not a valid list of notes.
    #[error("Malformed notes file {}: {source}", .path.display())]
    MalformedStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A filter date did not match `DD-MM-YYYY`.
    #[error("Invalid date format: '{input}'. Use DD-MM-YYYY")]
    InvalidDateFormat { input: String },

    /// Note was not found when performing an operation.
    #[error("Note not found: {id}")]
    NoteNotFound { id: u64 },

    /// User input that could not be interpreted.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Writing the backing file failed after the in-memory list changed.
    #[error("Failed to save notes to {}: {message}", .path.display())]
    PersistFailed { path: PathBuf, message: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl NotesError {
    /// Whether the interactive shell can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NotesError::InvalidDateFormat { .. }
                | NotesError::NoteNotFound { .. }
                | NotesError::InvalidInput { .. }
                | NotesError::PersistFailed { .. }
        )
    }
}

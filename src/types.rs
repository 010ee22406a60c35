//! Shared types for the notepad application.
//!
//! This module contains the result alias, the id assignment policy, the
//! outcome of a listing and the subcommands of the command-line interface.
use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::{Note, NotesError};

/// A specialized Result type for notepad operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// How the store picks the id of a newly added note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Number of stored notes plus one. Ids can repeat after a deletion.
    #[default]
    Length,
    /// Highest stored id plus one. Ids stay unique for the life of the file.
    MaxPlusOne,
}

impl IdStrategy {
    /// Computes the next id for the given notes.
    ///
    /// Fails once the id space is used up; an id is never zero.
    pub fn next_id(self, notes: &[Note]) -> Result<u64> {
        let last = match self {
            IdStrategy::Length => notes.len() as u64,
            IdStrategy::MaxPlusOne => notes.iter().map(|n| n.id).max().unwrap_or(0),
        };
        last.checked_add(1).ok_or_else(|| NotesError::InvalidInput {
            message: "no note ids left".to_string(),
        })
    }
}

/// Result of listing the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Matching notes in storage order
    Notes(Vec<Note>),
    /// A date filter was given and nothing was written on that day
    NoMatches { date: String },
}

/// Available subcommands for the notepad application
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (default when no subcommand is given)
    Shell,

    /// Add a new note
    Add {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: String,

        /// Body of the note
        #[clap(short, long, default_value = "")]
        message: String,
    },

    /// List notes, optionally only those written on one day
    List {
        /// Only show notes created or last edited on this day (DD-MM-YYYY)
        #[clap(short, long)]
        date: Option<String>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Replace the title and body of a note
    Edit {
        /// ID of the note to edit
        id: u64,

        /// New title for the note
        #[clap(short = 'T', long)]
        title: String,

        /// New body for the note
        #[clap(short, long, default_value = "")]
        message: String,
    },

    /// Delete a note by ID
    Delete {
        /// ID of the note to delete
        id: u64,
    },

    /// Show the effective configuration
    Config,
}

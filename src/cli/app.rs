//! CLI module for the notepad application
//!
//! This module handles the one-shot subcommands and hands control to the
//! interactive shell when asked to.
use std::io::{stdin, stdout};

use log::{debug, info};

use crate::{Commands, Config, Listing, Note, NoteStore, Result, Shell};

/// CLI Application handler - processes CLI commands and interfaces with NoteStore
pub struct App {
    /// The note store backend
    store: NoteStore,

    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Opens the store named by the configuration
    pub fn new(config: Config, verbose: bool) -> Result<Self> {
        let store = NoteStore::open(&config.notes_file, config.id_strategy)?;
        Ok(Self {
            store,
            config,
            verbose,
        })
    }

    /// The store this application operates on
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        debug!("Running command: {:?}", command);
        match command {
            Commands::Shell => self.run_shell()?,

            Commands::Add { title, message } => {
                let note = self.store.add(title, message)?;
                println!("Note added. ID: {}", note.id);
            }

            Commands::List { date, json } => self.list_notes(date.as_deref(), json)?,

            Commands::Edit { id, title, message } => {
                let note = self.store.edit_by_id(id, title, message)?;
                println!("Note {} updated ({})", note.id, note.timestamp);
            }

            Commands::Delete { id } => {
                let note = self.store.delete_by_id(id)?;
                println!("Note '{}' ({}) has been deleted.", note.title, note.id);
            }

            Commands::Config => {
                println!("{}", serde_json::to_string_pretty(&self.config)?);
            }
        }

        Ok(())
    }

    fn run_shell(&mut self) -> Result<()> {
        info!("Starting interactive shell on {}", self.store.path().display());
        let input = stdin().lock();
        let output = stdout().lock();
        Shell::new(&mut self.store, input, output).run()
    }

    /// List notes, optionally filtered by day
    fn list_notes(&self, date: Option<&str>, json: bool) -> Result<()> {
        let listing = self.store.list(date)?;

        if json {
            if let Listing::NoMatches { date } = &listing {
                eprintln!("No notes on {}.", date);
            }
            println!("{}", listing_json(&listing)?);
            return Ok(());
        }

        let notes = match listing {
            Listing::Notes(notes) => notes,
            Listing::NoMatches { date } => {
                println!("No notes on {}.", date);
                return Ok(());
            }
        };

        if notes.is_empty() {
            println!("No notes yet.");
            return Ok(());
        }

        self.display_notes_text(&notes);

        if self.verbose {
            println!(
                "\nFound {} note{}",
                notes.len(),
                if notes.len() == 1 { "" } else { "s" }
            );
        }
        Ok(())
    }

    /// Display notes in text format
    fn display_notes_text(&self, notes: &[Note]) {
        // Use terminal width for formatting if available
        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);

        for (i, note) in notes.iter().enumerate() {
            if i > 0 {
                println!("{}", "-".repeat(term_width.min(50)));
            }

            println!(
                "{}. {} ({})",
                note.id,
                console::style(&note.title).bold(),
                console::style(&note.timestamp).dim()
            );
            if !note.message.is_empty() {
                println!("{}", note.message);
            }
        }
    }
}

/// JSON array of the listed notes; a listing with no matches is `[]`
fn listing_json(listing: &Listing) -> Result<String> {
    let notes: &[Note] = match listing {
        Listing::Notes(notes) => notes.as_slice(),
        Listing::NoMatches { .. } => &[],
    };
    Ok(serde_json::to_string_pretty(notes)?)
}

//! Interactive menu for the notepad application
//!
//! Reads numbered menu choices from any line-oriented input and drives the
//! note store until the user picks "Exit" or the input ends.
use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::{parse_note_id, Listing, NoteStore, Result};

const MENU: &str = "\nChoose a command:\n\
1. Add note\n\
2. List notes\n\
3. Edit note\n\
4. Delete note\n\
5. Exit";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Maps the text typed at the menu prompt to a choice
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Edit),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop over a note store
pub struct Shell<'a, R, W> {
    store: &'a mut NoteStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a mut NoteStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs until "Exit" is chosen or the input is exhausted.
    ///
    /// Recoverable errors are printed and the menu is shown again; anything
    /// else, including console I/O failures, ends the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        info!("Interactive shell started");
        loop {
            writeln!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving shell");
                break;
            };

            let outcome = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::Add) => self.add_note(),
                Some(MenuChoice::List) => self.list_notes(),
                Some(MenuChoice::Edit) => self.edit_note(),
                Some(MenuChoice::Delete) => self.delete_note(),
                None => {
                    writeln!(
                        self.output,
                        "Unknown command. Please choose one of the listed commands."
                    )?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    warn!("{}", e);
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Interactive shell finished");
        Ok(())
    }

    /// Reads one line without its line ending, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn add_note(&mut self) -> Result<()> {
        let title = self.prompt("Enter note title: ")?;
        let message = self.prompt("Enter note text: ")?;

        let note = self.store.add(title, message)?;
        writeln!(self.output, "Note added. ID: {}", note.id)?;
        Ok(())
    }

    fn list_notes(&mut self) -> Result<()> {
        let date = self.prompt("Enter a date to filter by (DD-MM-YYYY), or leave empty: ")?;
        let date = date.trim();
        let filter = (!date.is_empty()).then_some(date);

        match self.store.list(filter)? {
            Listing::Notes(notes) => {
                for note in notes {
                    writeln!(self.output, "{}\n", note)?;
                }
            }
            Listing::NoMatches { date } => {
                writeln!(self.output, "No notes on {}.", date)?;
            }
        }
        Ok(())
    }

    fn edit_note(&mut self) -> Result<()> {
        let id = parse_note_id(&self.prompt("Enter the ID of the note to edit: ")?)?;
        let title = self.prompt("Enter new note title: ")?;
        let message = self.prompt("Enter new note text: ")?;

        self.store.edit_by_id(id, title, message)?;
        writeln!(self.output, "Note {} updated.", id)?;
        Ok(())
    }

    fn delete_note(&mut self) -> Result<()> {
        let id = parse_note_id(&self.prompt("Enter the ID of the note to delete: ")?)?;

        self.store.delete_by_id(id)?;
        writeln!(self.output, "Note {} deleted.", id)?;
        Ok(())
    }
}

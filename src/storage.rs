//! File-backed note store.
//!
//! Keeps the ordered note list in memory and rewrites the whole JSON file
//! after every change.
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, info, trace, warn};
use tempfile::NamedTempFile;

use crate::{
    load_notes_from_file, validate_filter_date, IdStrategy, Listing, Note, NotesError, Result,
};

/// Owns the ordered list of notes and keeps it in sync with one JSON file.
///
/// Every mutating operation rewrites the whole file. There is no locking, so
/// two processes sharing a file overwrite each other's changes.
#[derive(Debug)]
pub struct NoteStore {
    /// Backing JSON file
    path: PathBuf,

    /// Notes in insertion order
    notes: Vec<Note>,

    /// Id assignment policy for `add`
    id_strategy: IdStrategy,
}

impl NoteStore {
    /// Opens the store backed by `path`.
    ///
    /// A missing file yields an empty store; the file is only created on the
    /// first mutation. A file that exists but is not a list of notes fails with
    /// [`NotesError::MalformedStore`].
    pub fn open(path: impl Into<PathBuf>, id_strategy: IdStrategy) -> Result<Self> {
        let path = path.into();
        info!(
            "Opening note store: path={}, id_strategy={:?}",
            path.display(),
            id_strategy
        );

        let notes = if path.exists() {
            load_notes_from_file(&path)?
        } else {
            debug!("Notes file does not exist yet: {}", path.display());
            Vec::new()
        };

        info!("Loaded {} notes", notes.len());
        Ok(Self {
            path,
            notes,
            id_strategy,
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All notes in storage order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the first note with the given id
    pub fn find_by_id(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn position_of(&self, id: u64) -> Result<usize> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| {
                debug!("Note not found: {}", id);
                NotesError::NoteNotFound { id }
            })
    }

    /// Writes the whole list to the backing file.
    ///
    /// The JSON goes to a temporary file in the same directory which is then
    /// renamed over the target, so readers never see a half-written file.
    pub fn persist(&self) -> Result<()> {
        debug!(
            "Persisting {} notes to {}",
            self.notes.len(),
            self.path.display()
        );
        self.write_file().map_err(|e| {
            error!("Failed to persist notes to {}: {}", self.path.display(), e);
            NotesError::PersistFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })
    }

    fn write_file(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        if !dir.exists() {
            debug!("Creating parent directory: {}", dir.display());
            fs::create_dir_all(dir)?;
        }

        trace!("Serializing notes to JSON");
        let json = serde_json::to_string_pretty(&self.notes)?;

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;

        trace!("Moving temporary file over {}", self.path.display());
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Adds a note stamped with the current time and saves the store.
    ///
    /// The note stays in memory even if saving fails.
    pub fn add(&mut self, title: String, message: String) -> Result<Note> {
        let id = self.id_strategy.next_id(&self.notes)?;
        let note = Note::new(id, title, message);
        info!("Adding note {}", id);

        if self.find_by_id(id).is_some() {
            warn!("Note id {} is already in use and will be duplicated", id);
        }

        self.notes.push(note.clone());
        self.persist()?;
        Ok(note)
    }

    /// Lists notes, optionally only those whose timestamp starts with `filter_date`.
    ///
    /// `filter_date` must be `DD-MM-YYYY`; anything else fails with
    /// [`NotesError::InvalidDateFormat`].
    pub fn list(&self, filter_date: Option<&str>) -> Result<Listing> {
        let Some(date) = filter_date else {
            debug!("Listing all {} notes", self.notes.len());
            return Ok(Listing::Notes(self.notes.clone()));
        };

        validate_filter_date(date)?;

        let matching: Vec<Note> = self
            .notes
            .iter()
            .filter(|note| note.is_on_date(date))
            .cloned()
            .collect();

        info!("Found {} notes dated {}", matching.len(), date);
        if matching.is_empty() {
            return Ok(Listing::NoMatches {
                date: date.to_string(),
            });
        }
        Ok(Listing::Notes(matching))
    }

    /// Replaces title and message of the first note with `id`, refreshes its
    /// timestamp and saves the store.
    pub fn edit_by_id(&mut self, id: u64, title: String, message: String) -> Result<Note> {
        info!("Editing note {}", id);
        let index = self.position_of(id)?;

        let note = &mut self.notes[index];
        note.rewrite(title, message);
        let edited = note.clone();

        self.persist()?;
        Ok(edited)
    }

    /// Removes the first note with `id` and saves the store.
    pub fn delete_by_id(&mut self, id: u64) -> Result<Note> {
        info!("Deleting note {}", id);
        let index = self.position_of(id)?;

        let removed = self.notes.remove(index);
        self.persist()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::{tempdir, TempDir};

    use super::*;

    fn note(id: u64, title: &str, timestamp: &str) -> Note {
        Note {
            id,
            title: title.to_string(),
            message: format!("body of {title}"),
            timestamp: timestamp.to_string(),
        }
    }

    fn seeded(notes: &[Note]) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, serde_json::to_string_pretty(notes).unwrap()).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_opens_empty_without_creating_it() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let store = NoteStore::open(&path, IdStrategy::Length).unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "[{\"id\": \"one\"}]").unwrap();

        let err = NoteStore::open(&path, IdStrategy::Length).unwrap_err();
        assert!(matches!(err, NotesError::MalformedStore { .. }));
    }

    #[test]
    fn add_assigns_sequential_ids_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        for n in 1..=3 {
            let added = store
                .add(format!("title {n}"), String::new())
                .unwrap();
            assert_eq!(added.id, n);
        }

        let on_disk = load_notes_from_file(&path).unwrap();
        assert_eq!(on_disk, store.notes());
    }

    #[test]
    fn persisted_file_is_indented() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();
        store.add("a".to_string(), "b".to_string()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn length_strategy_reuses_ids_after_delete() {
        let (_dir, path) = seeded(&[
            note(1, "a", "01-01-2024 10:00:00"),
            note(2, "b", "01-01-2024 11:00:00"),
        ]);
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        store.delete_by_id(1).unwrap();
        let added = store.add("c".to_string(), String::new()).unwrap();
        assert_eq!(added.id, 2);
        assert_eq!(store.notes().iter().filter(|n| n.id == 2).count(), 2);
    }

    #[test]
    fn max_plus_one_strategy_keeps_ids_unique() {
        let (_dir, path) = seeded(&[
            note(1, "a", "01-01-2024 10:00:00"),
            note(2, "b", "01-01-2024 11:00:00"),
        ]);
        let mut store = NoteStore::open(&path, IdStrategy::MaxPlusOne).unwrap();

        store.delete_by_id(1).unwrap();
        let added = store.add("c".to_string(), String::new()).unwrap();
        assert_eq!(added.id, 3);
    }

    #[test]
    fn add_fails_cleanly_when_ids_run_out() {
        let (_dir, path) = seeded(&[note(u64::MAX, "last", "01-01-2024 10:00:00")]);
        let before = fs::read_to_string(&path).unwrap();
        let mut store = NoteStore::open(&path, IdStrategy::MaxPlusOne).unwrap();

        let err = store.add("b".to_string(), String::new()).unwrap_err();
        assert!(matches!(err, NotesError::InvalidInput { .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn list_without_filter_returns_everything_in_order() {
        let notes = [
            note(1, "a", "15-03-2024 10:00:00"),
            note(2, "b", "16-03-2024 10:00:00"),
        ];
        let (_dir, path) = seeded(&notes);
        let store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        let first = store.list(None).unwrap();
        assert_eq!(first, Listing::Notes(notes.to_vec()));
        assert_eq!(store.list(None).unwrap(), first);
    }

    #[test]
    fn list_filters_by_timestamp_prefix() {
        let (_dir, path) = seeded(&[
            note(1, "a", "15-03-2024 10:00:00"),
            note(2, "b", "16-03-2024 10:00:00"),
            note(3, "c", "15-03-2024 23:59:59"),
        ]);
        let store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        match store.list(Some("15-03-2024")).unwrap() {
            Listing::Notes(found) => {
                let ids: Vec<u64> = found.iter().map(|n| n.id).collect();
                assert_eq!(ids, vec![1, 3]);
            }
            other => panic!("unexpected listing: {other:?}"),
        }
    }

    #[test]
    fn list_reports_no_matches_separately() {
        let (_dir, path) = seeded(&[note(1, "a", "15-03-2024 10:00:00")]);
        let store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        assert_eq!(
            store.list(Some("01-01-2020")).unwrap(),
            Listing::NoMatches {
                date: "01-01-2020".to_string()
            }
        );
    }

    #[test]
    fn list_rejects_bad_date_without_touching_store() {
        let (_dir, path) = seeded(&[note(1, "a", "15-03-2024 10:00:00")]);
        let before = fs::read_to_string(&path).unwrap();
        let store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        let err = store.list(Some("15/03/2024")).unwrap_err();
        assert!(matches!(err, NotesError::InvalidDateFormat { .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn edit_updates_only_the_target() {
        let (_dir, path) = seeded(&[
            note(1, "a", "01-01-2000 10:00:00"),
            note(2, "b", "01-01-2000 11:00:00"),
        ]);
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        let edited = store
            .edit_by_id(2, "New Title".to_string(), "New Body".to_string())
            .unwrap();
        assert_eq!(edited.title, "New Title");
        assert_eq!(edited.message, "New Body");
        assert_ne!(edited.timestamp, "01-01-2000 11:00:00");

        let reloaded = NoteStore::open(&path, IdStrategy::Length).unwrap();
        assert_eq!(reloaded.notes()[0], note(1, "a", "01-01-2000 10:00:00"));
        assert_eq!(reloaded.notes()[1], edited);
    }

    #[test]
    fn edit_of_missing_id_leaves_file_alone() {
        let (_dir, path) = seeded(&[note(1, "a", "01-01-2000 10:00:00")]);
        let before = fs::read_to_string(&path).unwrap();
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        let err = store
            .edit_by_id(2, "New Title".to_string(), "New Body".to_string())
            .unwrap_err();
        assert!(matches!(err, NotesError::NoteNotFound { id: 2 }));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(store.notes()[0].title, "a");
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let (_dir, path) = seeded(&[
            note(1, "a", "01-01-2000 10:00:00"),
            note(2, "b", "01-01-2000 11:00:00"),
            note(3, "c", "01-01-2000 12:00:00"),
        ]);
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        let removed = store.delete_by_id(1).unwrap();
        assert_eq!(removed.title, "a");
        assert_eq!(
            store.notes(),
            &[
                note(2, "b", "01-01-2000 11:00:00"),
                note(3, "c", "01-01-2000 12:00:00"),
            ]
        );
        assert_eq!(load_notes_from_file(&path).unwrap(), store.notes());
    }

    #[test]
    fn delete_takes_only_the_first_duplicate() {
        let (_dir, path) = seeded(&[
            note(2, "first", "01-01-2000 10:00:00"),
            note(2, "second", "01-01-2000 11:00:00"),
        ]);
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        let removed = store.delete_by_id(2).unwrap();
        assert_eq!(removed.title, "first");
        assert_eq!(store.find_by_id(2).map(|n| n.title.as_str()), Some("second"));
    }

    #[test]
    fn delete_of_missing_id_reports_not_found() {
        let (_dir, path) = seeded(&[note(1, "a", "01-01-2000 10:00:00")]);
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        assert!(matches!(
            store.delete_by_id(9),
            Err(NotesError::NoteNotFound { id: 9 })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn persist_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("notes.json");
        let mut store = NoteStore::open(&path, IdStrategy::Length).unwrap();

        store.add("a".to_string(), String::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn persist_failure_is_reported_and_memory_keeps_the_note() {
        let dir = tempdir().unwrap();
        // a directory sitting where the file should be cannot be replaced
        let path = dir.path().join("notes.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();
        let mut store = NoteStore {
            path: path.clone(),
            notes: Vec::new(),
            id_strategy: IdStrategy::Length,
        };

        let err = store.add("a".to_string(), String::new()).unwrap_err();
        assert!(matches!(err, NotesError::PersistFailed { .. }));
        assert_eq!(store.len(), 1);
    }
}

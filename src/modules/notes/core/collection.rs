// The note sequence and its id counter.
//
// Responsibilities
// - Keep notes in insertion order; that order is the listing order.
// - Hand out ids from a counter that only moves forward, so ids are never reused.
//
// No locking happens here. The collection is only reachable through a store
// that holds it behind a single exclusive lock.

use crate::modules::notes::core::errors::NoteError;
use crate::modules::notes::core::note::{NewNote, Note};

#[derive(Debug, Default)]
pub struct NoteCollection {
    notes: Vec<Note>,
    next_id: i64,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, draft: NewNote) -> Note {
        self.next_id += 1;
        let note = draft.into_note(self.next_id);
        self.notes.push(note.clone());
        note
    }

    pub fn list(&self) -> Vec<Note> {
        self.notes.clone()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Note, NoteError> {
        self.notes
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(NoteError::NotFound { id })
    }

    /// Replaces the whole record in place. Fields are never merged.
    pub fn update(&mut self, replacement: Note) -> Result<Note, NoteError> {
        let slot = self
            .notes
            .iter_mut()
            .find(|note| note.id == replacement.id)
            .ok_or(NoteError::NotFound { id: replacement.id })?;
        *slot = replacement.clone();
        Ok(replacement)
    }

    pub fn delete_by_id(&mut self, id: i64) -> Result<(), NoteError> {
        let position = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(NoteError::NotFound { id })?;
        self.notes.remove(position);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }
}

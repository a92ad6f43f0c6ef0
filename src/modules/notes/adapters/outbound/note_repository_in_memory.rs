// In memory implementation of the NoteRepository port.
//
// Responsibilities
// - Own one NoteCollection behind one exclusive lock.
// - Hold the lock for the whole body of every operation, reads included.
//   Operations are therefore totally ordered and never interleave.

use crate::modules::notes::adapters::outbound::note_repository::NoteRepository;
use crate::modules::notes::core::collection::NoteCollection;
use crate::modules::notes::core::errors::NoteError;
use crate::modules::notes::core::note::{NewNote, Note};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Mutex<NoteCollection>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, draft: NewNote) -> Note {
        let mut guard = self.notes.lock().await;
        let note = guard.create(draft);
        tracing::debug!(id = note.id, size = guard.len(), "note created");
        note
    }

    async fn list(&self) -> Vec<Note> {
        self.notes.lock().await.list()
    }

    async fn get_by_id(&self, id: i64) -> Result<Note, NoteError> {
        self.notes.lock().await.get_by_id(id)
    }

    async fn update(&self, replacement: Note) -> Result<Note, NoteError> {
        let mut guard = self.notes.lock().await;
        let note = guard.update(replacement)?;
        tracing::debug!(id = note.id, "note updated");
        Ok(note)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), NoteError> {
        let mut guard = self.notes.lock().await;
        guard.delete_by_id(id)?;
        tracing::debug!(id, size = guard.len(), "note deleted");
        Ok(())
    }
}

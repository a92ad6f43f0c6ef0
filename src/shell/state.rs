use crate::modules::notes::adapters::outbound::note_repository::NoteRepository;
use crate::modules::notes::adapters::outbound::note_repository_in_memory::InMemoryNoteRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryNoteRepository::new()))
    }
}

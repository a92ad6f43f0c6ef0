use crate::modules::notes::core::errors::NoteError;
use crate::modules::notes::core::note::{NewNote, Note};
use async_trait::async_trait;

/// Storage port for notes. Each call is atomic: it either fully applies or has no effect.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, draft: NewNote) -> Note;
    async fn list(&self) -> Vec<Note>;
    async fn get_by_id(&self, id: i64) -> Result<Note, NoteError>;
    async fn update(&self, replacement: Note) -> Result<Note, NoteError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), NoteError>;
}

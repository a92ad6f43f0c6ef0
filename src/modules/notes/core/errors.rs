#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NoteError {
    #[error("note {id} not found")]
    NotFound { id: i64 },
}

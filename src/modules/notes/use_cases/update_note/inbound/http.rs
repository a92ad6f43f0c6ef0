use axum::{Json, body::Bytes, extract::State, response::IntoResponse};

use crate::modules::notes::adapters::inbound::http_error::ApiError;
use crate::modules::notes::adapters::inbound::json_body::decode_json;
use crate::modules::notes::core::note::Note;
use crate::shell::state::AppState;

/// Replaces the note whose id matches the body. Omitted fields become empty.
pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let replacement: Note = decode_json(&body, "Failed to decode note")?;
    let note = state.notes.update(replacement).await?;
    Ok(Json(note))
}

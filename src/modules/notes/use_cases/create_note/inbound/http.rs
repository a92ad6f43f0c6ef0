use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::notes::adapters::inbound::http_error::ApiError;
use crate::modules::notes::adapters::inbound::json_body::decode_json;
use crate::modules::notes::core::note::NewNote;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let draft: NewNote = decode_json(&body, "Bad Request")?;
    let note = state.notes.create(draft).await;
    Ok((StatusCode::CREATED, Json(note)))
}

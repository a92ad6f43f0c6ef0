use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::modules::notes::adapters::inbound::http_error::ApiError;
use crate::modules::notes::adapters::inbound::id_param::{id_values, parse_id};
use crate::shell::state::AppState;

/// Lists every note, or looks one up when exactly one `id` is given.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    if let [raw] = id_values(&params).as_slice() {
        let id = parse_id(raw, "Invalid ID format")?;
        let note = state
            .notes
            .get_by_id(id)
            .await
            .map_err(|_| ApiError::NotFound("Note not found"))?;
        return Ok(Json(note).into_response());
    }

    Ok(Json(state.notes.list().await).into_response())
}

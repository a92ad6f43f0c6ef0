use axum::{
    extract::{Query, State},
    http::StatusCode,
};

use crate::modules::notes::adapters::inbound::http_error::ApiError;
use crate::modules::notes::adapters::inbound::id_param::{id_values, parse_id};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let raw = id_values(&params)
        .first()
        .copied()
        .ok_or(ApiError::MissingIdentifier("ID is required"))?;
    let id = parse_id(raw, "Invalid ID")?;
    state.notes.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}

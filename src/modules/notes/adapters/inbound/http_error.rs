use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::notes::core::errors::NoteError;

/// Errors surfaced at the HTTP boundary. Each variant carries the plain text body sent back.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    MalformedInput(&'static str),

    #[error("{0}")]
    InvalidIdentifier(&'static str),

    #[error("{0}")]
    MissingIdentifier(&'static str),

    #[error("{0}")]
    NotFound(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_)
            | ApiError::InvalidIdentifier(_)
            | ApiError::MissingIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<NoteError> for ApiError {
    fn from(error: NoteError) -> Self {
        match error {
            NoteError::NotFound { .. } => ApiError::NotFound("Note Not Found"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status(), reason = %self, "request rejected");
        (self.status(), self.to_string()).into_response()
    }
}

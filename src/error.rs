use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced over HTTP. Every variant renders as
/// `{"detail": <message>}` with the matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::MovieNotFound)
            | ApiError::Store(StoreError::ShowtimeNotFound)
            | ApiError::Store(StoreError::BookingNotFound) => StatusCode::NOT_FOUND,
            // Seat conflicts are reported as 400, matching the documented contract.
            ApiError::Store(StoreError::SeatTaken) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Booking, NewBooking};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/{booking_id}", delete(delete_booking))
}

// POST /bookings
async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewBooking>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = state.store.create_booking(req).map_err(|e| {
        tracing::debug!("booking rejected: {e}");
        e
    })?;
    tracing::info!(
        "booking {} created: movie {} seat {}",
        booking.id,
        booking.movie_id,
        booking.seat_number
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

// GET /bookings
async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.store.list_bookings())
}

// DELETE /bookings/{booking_id}
async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_booking(booking_id)?;
    tracing::info!("booking {booking_id} deleted");
    Ok(StatusCode::NO_CONTENT)
}

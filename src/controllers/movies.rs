use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::Movie;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/movies", get(list_movies))
}

#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    pub date: Option<String>,
}

// GET /movies?date=...
async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MoviesQuery>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let date = params.date.as_deref().map(parse_date_param).transpose()?;
    Ok(Json(state.store.movies_on(date)))
}

// Accepts a bare date or a full datetime; filtering is by calendar date.
fn parse_date_param(raw: &str) -> Result<NaiveDate, ApiError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .map_err(|_| ApiError::BadRequest(format!("Invalid date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_param_accepts_both_granularities() {
        let from_date = parse_date_param("2024-11-08").unwrap();
        let from_datetime = parse_date_param("2024-11-08T12:00:00").unwrap();
        assert_eq!(from_date, from_datetime);
    }

    #[test]
    fn garbage_date_param_is_rejected() {
        assert!(parse_date_param("next tuesday").is_err());
    }
}

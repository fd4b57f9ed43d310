//! HTTP client for the booking API, used by the CLI binary.

use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::ClientConfig;
use crate::models::{Booking, Movie, NewBooking};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Could not reach the booking service: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with an error status; `detail` carries its message.
    #[error("{detail}")]
    Api { status: StatusCode, detail: String },
}

/// Error body shape the service uses for every failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Clone)]
pub struct BookingApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl BookingApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, ClientError> {
        let response = self
            .http_client
            .get(format!("{}/movies", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ClientError> {
        debug!(
            "creating booking: movie {} seat {}",
            booking.movie_id, booking.seat_number
        );
        let response = self
            .http_client
            .post(format!("{}/bookings", self.base_url))
            .json(booking)
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ClientError> {
        let response = self
            .http_client
            .get(format!("{}/bookings", self.base_url))
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    pub async fn delete_booking(&self, booking_id: i64) -> Result<(), ClientError> {
        let response = self
            .http_client
            .delete(format!("{}/bookings/{}", self.base_url, booking_id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turns a non-success response into `ClientError::Api`, pulling the
/// message out of the `{"detail": ...}` body when there is one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("Unexpected response from the service ({status})"),
    };
    Err(ClientError::Api { status, detail })
}

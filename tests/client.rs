//! Tests for `BookingApiClient` against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use movie_booking::client::{BookingApiClient, ClientError};

// ---------------------------------------------------------------------------
// Test: list_movies decodes the catalog payload
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_movies_decodes_catalog() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "Gladiator",
                "description": "Follow Maximus on his quest for vengance and survival.",
                "showtimes": [{ "time": "2024-11-08T12:00:00" }]
            }
        ])))
        .mount(&server)
        .await;

    let client = BookingApiClient::new(server.uri());
    let movies = client.list_movies().await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, 1);
    assert_eq!(movies[0].title, "Gladiator");
    assert_eq!(movies[0].showtimes.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: create_booking sends the documented body shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_booking_posts_expected_body() {
    let server = MockServer::start().await;
    let expected_body = json!({
        "movie_id": 1,
        "showtime": { "time": "2024-11-08T12:00:00" },
        "seat_number": 5
    });
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 1,
            "movie_id": 1,
            "showtime": { "time": "2024-11-08T12:00:00" },
            "seat_number": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BookingApiClient::new(server.uri());
    let request: movie_booking::models::NewBooking =
        serde_json::from_value(expected_body).unwrap();
    let booking = client.create_booking(&request).await.unwrap();

    assert_eq!(booking.id, 1);
    assert_eq!(booking.seat_number, 5);
}

// ---------------------------------------------------------------------------
// Test: error responses surface the detail message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_error_carries_detail_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Seat is already booked for this showtime"
        })))
        .mount(&server)
        .await;

    let client = BookingApiClient::new(server.uri());
    let request = serde_json::from_value(json!({
        "movie_id": 1,
        "showtime": { "time": "2024-11-08T12:00:00" },
        "seat_number": 5
    }))
    .unwrap();
    let err = client.create_booking(&request).await.unwrap_err();

    match err {
        ClientError::Api { status, detail } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(detail, "Seat is already booked for this showtime");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: delete handles 204 and decodes 404 bodies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_booking_accepts_empty_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookings/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = BookingApiClient::new(server.uri());
    client.delete_booking(1).await.unwrap();
}

#[tokio::test]
async fn delete_booking_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookings/7"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Booking not found" })),
        )
        .mount(&server)
        .await;

    let client = BookingApiClient::new(server.uri());
    let err = client.delete_booking(7).await.unwrap_err();
    assert_eq!(err.to_string(), "Booking not found");
}

// ---------------------------------------------------------------------------
// Test: a non-JSON error body still produces a readable message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unexpected_error_body_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = BookingApiClient::new(server.uri());
    let err = client.list_bookings().await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::routing;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use movie_booking::config::{AppConfig, ClientConfig, Config};
use movie_booking::{controllers, AppState};

/// Build a test `Config` without touching the environment.
pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "error".to_string(),
        },
        client: ClientConfig {
            base_url: "http://127.0.0.1:8000".to_string(),
        },
    }
}

/// Build the application router over a freshly seeded store.
///
/// Mirrors the router construction in `main.rs` (minus the trace layer) so
/// tests exercise the same routes production serves.
pub fn build_test_app() -> Router {
    let state = AppState::new(test_config());
    Router::new()
        .route("/", routing::get(|| async { "Movie Booking API v1.0" }))
        .route("/health", routing::get(|| async { "OK" }))
        .merge(controllers::routes())
        .with_state(state)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

use serde::Deserialize;
use std::env;

// Container for all runtime settings
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub client: ClientConfig,
}

// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

// Settings for the CLI client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "movie_booking=debug,tower_http=debug".to_string()),
            },
            client: ClientConfig {
                base_url: env::var("BOOKING_API_URL")
                    .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            },
        }
    }
}

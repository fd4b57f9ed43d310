pub mod client;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod store;

use std::sync::Arc;

// Shared state for the whole application
pub struct AppState {
    pub store: store::Store,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            store: store::Store::with_seed_catalog(),
            config,
        })
    }
}

//! Shared application state for the web server.

use std::sync::Arc;

use pedinfo_catalog::Catalog;

use crate::config::Config;

/// Shared state injected into every Axum handler.
/// The catalog is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self { catalog: Arc::new(catalog), config }
    }
}

pub type SharedState = Arc<AppState>;

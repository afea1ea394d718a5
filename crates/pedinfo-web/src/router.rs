//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    dashboard::index,
    diseases::{list_diseases, get_disease},
    symptoms::list_symptoms,
    search::search_by_symptom,
    statistics::list_statistics,
    meta::filter_meta,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Page
        .route("/",                               get(index))

        // API endpoints
        .route("/diseases",                       get(list_diseases))
        .route("/diseases/{id}",                  get(get_disease))
        .route("/symptoms",                       get(list_symptoms))
        .route("/search/by-symptom/{symptom_id}", get(search_by_symptom))
        .route("/statistics",                     get(list_statistics))
        .route("/meta/filters",                   get(filter_meta))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

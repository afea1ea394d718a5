//! Disease listing and detail endpoints.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use tracing::debug;

use crate::state::SharedState;
use pedinfo_catalog::{DiseaseFilter, IntArg};
use pedinfo_common::error::ApiError;

/// GET /diseases - Disease summaries matching all supplied filters
pub async fn list_diseases(
    State(state): State<SharedState>,
    WithRejection(Query(filter), _): WithRejection<Query<DiseaseFilter>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(?filter, "list diseases");
    Ok(Json(state.catalog.list_diseases(&filter)))
}

/// GET /diseases/{id} - Full record with seasonal statistics
pub async fn get_disease(
    State(state): State<SharedState>,
    WithRejection(Path(id), _): WithRejection<Path<IntArg>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(?id, "get disease");
    let disease = state.catalog.disease_with_stats(id)?;
    Ok(Json(disease))
}

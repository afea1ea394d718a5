//! Symptom-based disease search.
//! Responds 404 when no disease presents the symptom, unlike the filtered listing.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use tracing::debug;

use crate::state::SharedState;
use pedinfo_catalog::IntArg;
use pedinfo_common::error::ApiError;

/// GET /search/by-symptom/{symptom_id}
pub async fn search_by_symptom(
    State(state): State<SharedState>,
    WithRejection(Path(symptom_id), _): WithRejection<Path<IntArg>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(?symptom_id, "search by symptom");
    let hits = state.catalog.search_by_symptom(symptom_id)?;
    Ok(Json(hits))
}

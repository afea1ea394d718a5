//! Seasonal case statistics.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use tracing::debug;

use crate::state::SharedState;
use pedinfo_catalog::StatisticsFilter;
use pedinfo_common::error::ApiError;

/// GET /statistics - Seasonal case counts, filtered by year / season / disease
pub async fn list_statistics(
    State(state): State<SharedState>,
    WithRejection(Query(filter), _): WithRejection<Query<StatisticsFilter>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(?filter, "list statistics");
    Ok(Json(state.catalog.list_statistics(&filter)))
}

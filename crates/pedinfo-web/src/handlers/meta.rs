//! Filter metadata used by the browser UI to populate its select controls.

use axum::{extract::State, Json};
use pedinfo_common::FilterMeta;

use crate::state::SharedState;

/// GET /meta/filters
pub async fn filter_meta(State(state): State<SharedState>) -> Json<FilterMeta> {
    Json(state.catalog.filter_meta())
}

//! Symptom reference list.

use axum::{extract::State, Json};
use pedinfo_common::Symptom;

use crate::state::SharedState;

/// GET /symptoms - All symptoms in dataset order
pub async fn list_symptoms(State(state): State<SharedState>) -> Json<Vec<Symptom>> {
    Json(state.catalog.list_symptoms().to_vec())
}

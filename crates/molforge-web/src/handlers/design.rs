//! Candidate generation endpoint.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;

use molforge_design::{generate, TargetMap};

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub target_properties: TargetMap,
    pub count: Option<usize>,
}

/// POST /generate - Generate candidates toward target properties
pub async fn generate_candidates(
    State(state): State<SharedState>,
    Json(req): Json<GenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.target_properties.is_empty() {
        return Err(ApiError::BadRequest("Target properties required".to_string()));
    }

    let requested = req.count.unwrap_or(state.config.default_candidates);
    let outcome = generate(
        &req.target_properties,
        requested,
        state.config.max_candidates,
        &mut rand::thread_rng(),
    );
    state.counters.record_candidates(outcome.count as u64);
    tracing::info!(
        count = outcome.count,
        targets = req.target_properties.len(),
        "generated candidates"
    );

    Ok(Json(outcome))
}

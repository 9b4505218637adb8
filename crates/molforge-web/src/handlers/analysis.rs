//! Molecular scoring endpoints.

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use molforge_predict::{analyze, property_profile, synthesize_structure, PropertyProfile};

use crate::error::ApiError;
use crate::state::SharedState;

// === API Types ===

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub smiles: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub smiles: String,
    pub profile: PropertyProfile,
    pub overall_confidence: f64,
}

// === API Endpoints ===

/// POST /analyze - Full property report for one molecule
pub async fn analyze_molecule(
    State(state): State<SharedState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let smiles = req.smiles.trim();
    let report = analyze(smiles).map_err(|err| {
        state.counters.record_validation_failure();
        tracing::debug!(smiles, %err, "analysis rejected");
        ApiError::from(err)
    })?;
    state.counters.record_analysis();

    Ok(Json(report))
}

/// POST /structure - Fabricated 3D conformer for one molecule
pub async fn molecule_structure(
    State(state): State<SharedState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let smiles = req.smiles.trim();
    let model = synthesize_structure(smiles).map_err(|err| {
        state.counters.record_validation_failure();
        tracing::debug!(smiles, %err, "structure rejected");
        ApiError::from(err)
    })?;

    Ok(Json(model))
}

/// POST /profile - Analysis condensed to a normalised 0-100 profile
pub async fn molecule_profile(
    State(state): State<SharedState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let smiles = req.smiles.trim();
    let report = analyze(smiles).map_err(|err| {
        state.counters.record_validation_failure();
        tracing::debug!(smiles, %err, "profile rejected");
        ApiError::from(err)
    })?;
    state.counters.record_analysis();

    let profile = property_profile(&report.predictions);
    Ok(Json(ProfileResponse {
        smiles: report.smiles,
        profile,
        overall_confidence: report.overall_confidence,
    }))
}

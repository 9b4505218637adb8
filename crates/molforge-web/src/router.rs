//! Axum router wiring every URL path to its handler.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    analysis::{analyze_molecule, molecule_profile, molecule_structure},
    design::generate_candidates,
    system::{health_check, platform_stats, service_root},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Scoring
        .route("/analyze",   post(analyze_molecule))
        .route("/structure", post(molecule_structure))
        .route("/profile",   post(molecule_profile))

        // Generation
        .route("/generate",  post(generate_candidates))

        // Service
        .route("/",          get(service_root))
        .route("/health",    get(health_check))
        .route("/stats",     get(platform_stats))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

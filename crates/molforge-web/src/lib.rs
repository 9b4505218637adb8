//! molforge-web — HTTP surface for the property scorer.
//! Provides a JSON API with:
//!   - Molecular property analysis
//!   - Candidate generation toward target properties
//!   - Fabricated 3D structure models
//!   - Normalised property profiles
//!   - Health, stats and service descriptor endpoints

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

//! molforge-predict — Deterministic molecular property scoring.
//!
//! Maps a SMILES string to a fixed set of synthesized property predictions:
//!   - Superficial input validation (length, atoms, parentheses, alphabet)
//!   - A stable per-input seed so identical inputs score identically
//!   - Value and confidence synthesis per tracked property
//!   - Interpretation and risk classification via threshold ladders
//!   - Fabricated 3D conformers and a normalised property profile
//!
//! Values are derived from string statistics plus seeded noise; no chemistry
//! is performed and no model is consulted.

pub mod analysis;
pub mod descriptors;
pub mod interpret;
pub mod profile;
pub mod properties;
pub mod seed;
pub mod structure;
pub mod validate;

// Re-export the surface most callers need
pub use analysis::{analyze, analyze_with_rng, AnalysisReport, MODEL_VERSION};
pub use interpret::RiskLevel;
pub use profile::{property_profile, PropertyProfile};
pub use properties::{PredictionSet, PropertyKind, PropertyPrediction};
pub use structure::{synthesize_structure, StructureModel};
pub use validate::{validate_smiles, ValidationError};

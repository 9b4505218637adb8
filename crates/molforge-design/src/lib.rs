//! molforge-design — Scaffold-based candidate generation.
//!
//! Fabricates candidate molecules by decorating known ring systems toward
//! caller-supplied property targets, then attaches decorative novelty,
//! validity and optimization scores. No chemical search is performed; the
//! scores are synthesized the same way the property scorer synthesizes its
//! predictions.

pub mod generator;
pub mod scaffolds;

pub use generator::{generate, Candidate, DesignOutcome, DesignStatistics, TargetMap};
pub use scaffolds::{pick_scaffold, SCAFFOLDS};

//! molforge-common — Shared errors, configuration, and counters used across all Molforge crates.

pub mod error;
pub mod config;
pub mod counters;

// Re-export commonly used types
pub use config::MolforgeConfig;
pub use counters::{UsageCounters, UsageSnapshot};
pub use error::{MolforgeError, Result};

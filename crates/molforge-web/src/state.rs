//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Instant;

use molforge_common::{MolforgeConfig, UsageCounters};

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: MolforgeConfig,
    /// Process-wide usage totals, the only state that outlives a request.
    pub counters: UsageCounters,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: MolforgeConfig) -> Self {
        Self {
            config,
            counters: UsageCounters::default(),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub type SharedState = Arc<AppState>;

//! Process-wide usage counters.
//!
//! The only state that outlives a request. Handlers receive these through
//! shared application state rather than reaching for module globals, so tests
//! can run against a fresh instance.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Atomic totals for the lifetime of the process.
#[derive(Debug, Default)]
pub struct UsageCounters {
    analyses: AtomicU64,
    candidates_generated: AtomicU64,
    validation_failures: AtomicU64,
}

/// Point-in-time copy of the counters, for JSON payloads.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsageSnapshot {
    pub total_analyses: u64,
    pub candidates_generated: u64,
    pub validation_failures: u64,
}

impl UsageCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_analysis(&self) {
        self.analyses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_candidates(&self, count: u64) {
        self.candidates_generated.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        UsageSnapshot {
            total_analyses: self.analyses.load(Ordering::Relaxed),
            candidates_generated: self.candidates_generated.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let counters = UsageCounters::new();
        let snap = counters.snapshot();
        assert_eq!(snap.total_analyses, 0);
        assert_eq!(snap.candidates_generated, 0);
        assert_eq!(snap.validation_failures, 0);
    }

    #[test]
    fn test_record_and_snapshot() {
        let counters = UsageCounters::new();
        counters.record_analysis();
        counters.record_analysis();
        counters.record_candidates(10);
        counters.record_validation_failure();

        let snap = counters.snapshot();
        assert_eq!(snap.total_analyses, 2);
        assert_eq!(snap.candidates_generated, 10);
        assert_eq!(snap.validation_failures, 1);
    }

    #[test]
    fn test_concurrent_increments() {
        use std::sync::Arc;

        let counters = Arc::new(UsageCounters::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let counters = Arc::clone(&counters);
            handles.push(std::thread::spawn(move || {
                for _ in 0..1000 {
                    counters.record_analysis();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.snapshot().total_analyses, 8000);
    }
}

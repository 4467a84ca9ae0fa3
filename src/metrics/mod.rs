//! Validation failure metrics.
//!
//! Counts every rejected field value. The counter is a cheap cloneable handle
//! so a single instance can be shared by validators, contacts and services, or
//! swapped for an isolated one in tests.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static GLOBAL: Lazy<ValidationMetrics> = Lazy::new(ValidationMetrics::new);

/// Thread-safe counter of validation failures.
#[derive(Debug, Clone)]
pub struct ValidationMetrics {
    failures_total: Arc<AtomicU64>,
}

impl Default for ValidationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationMetrics {
    /// Create a new counter starting at zero.
    pub fn new() -> Self {
        Self {
            failures_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The process-wide instance used by default validators.
    pub fn global() -> &'static ValidationMetrics {
        &GLOBAL
    }

    /// Record one validation failure and return the updated total.
    pub fn record_failure(&self, field: &str, reason: &str) -> u64 {
        let total = self.failures_total.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::warn!(
            field = %field,
            reason = %reason,
            failures_total = total,
            "Validation failure"
        );

        total
    }

    /// Get the number of failures recorded since creation or the last reset.
    pub fn failure_count(&self) -> u64 {
        self.failures_total.load(Ordering::SeqCst)
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.failures_total.store(0, Ordering::SeqCst);
    }
}

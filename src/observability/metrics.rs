//! Search metrics.
//!
//! Counters for searches served, results returned and store failures, with a
//! structured `tracing` event per search.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for the search service.
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    searches_total: Arc<AtomicU64>,
    results_total: Arc<AtomicU64>,
    empty_queries_total: Arc<AtomicU64>,
    store_errors_total: Arc<AtomicU64>,
}

impl SearchMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            searches_total: Arc::new(AtomicU64::new(0)),
            results_total: Arc::new(AtomicU64::new(0)),
            empty_queries_total: Arc::new(AtomicU64::new(0)),
            store_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed search.
    pub fn track_search(&self, backend: &str, token_count: usize, duration_ms: u128, result_count: usize) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        self.results_total
            .fetch_add(result_count as u64, Ordering::Relaxed);
        if token_count == 0 {
            self.empty_queries_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::info!(
            backend = %backend,
            token_count = token_count,
            duration_ms = duration_ms,
            result_count = result_count,
            "Search completed"
        );
    }

    /// Track a store failure.
    pub fn track_store_error(&self, operation: &str) {
        self.store_errors_total.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(operation = %operation, "Store operation failed");
    }

    /// Get the total number of searches.
    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    /// Get the total number of advocates returned across searches.
    pub fn results_total(&self) -> u64 {
        self.results_total.load(Ordering::Relaxed)
    }

    /// Get the number of searches with a blank query.
    pub fn empty_queries_total(&self) -> u64 {
        self.empty_queries_total.load(Ordering::Relaxed)
    }

    /// Get the total number of store failures.
    pub fn store_errors_total(&self) -> u64 {
        self.store_errors_total.load(Ordering::Relaxed)
    }

    /// Mean results per search (0.0 before the first search).
    pub fn mean_results(&self) -> f64 {
        let searches = self.searches_total();
        if searches == 0 {
            0.0
        } else {
            self.results_total() as f64 / searches as f64
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Searches: {}\n\
             Blank Queries: {}\n\
             Results Returned: {} ({:.2} per search)\n\
             Store Errors: {}",
            self.searches_total(),
            self.empty_queries_total(),
            self.results_total(),
            self.mean_results(),
            self.store_errors_total(),
        )
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::trace!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}

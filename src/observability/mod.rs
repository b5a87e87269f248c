//! Observability module for monitoring and metrics.
//!
//! This module provides search metrics and operation timing, reported
//! through structured `tracing` events.

pub mod metrics;

pub use metrics::{SearchMetrics, Timer};

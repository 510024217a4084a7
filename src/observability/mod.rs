//! Observability module for monitoring the command session.

pub mod metrics;

pub use metrics::SessionMetrics;

//! Session metrics for the command loop.
//!
//! Counts handled commands and their outcomes so a summary can be logged when
//! the session ends.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for one interactive session.
///
/// Lines that never parse into a command (blank or unknown) count as both a
/// command and an error, and are also tallied separately.
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    commands_total: Arc<AtomicU64>,
    command_errors_total: Arc<AtomicU64>,
    rejected_inputs_total: Arc<AtomicU64>,
    validation_errors_total: Arc<AtomicU64>,
}

impl SessionMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            commands_total: Arc::new(AtomicU64::new(0)),
            command_errors_total: Arc::new(AtomicU64::new(0)),
            rejected_inputs_total: Arc::new(AtomicU64::new(0)),
            validation_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a handled command.
    pub fn track_command(&self, command: &str, success: bool) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.command_errors_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(command = %command, success = success, "Command handled");
    }

    /// Track a line that did not parse into a command.
    pub fn track_rejected_input(&self) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);
        self.command_errors_total.fetch_add(1, Ordering::Relaxed);
        self.rejected_inputs_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Input rejected");
    }

    /// Track input rejected by field validation.
    pub fn track_validation_error(&self, command: &str) {
        self.validation_errors_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(command = %command, "Validation error");
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    pub fn command_errors_total(&self) -> u64 {
        self.command_errors_total.load(Ordering::Relaxed)
    }

    pub fn rejected_inputs_total(&self) -> u64 {
        self.rejected_inputs_total.load(Ordering::Relaxed)
    }

    pub fn validation_errors_total(&self) -> u64 {
        self.validation_errors_total.load(Ordering::Relaxed)
    }

    /// Get the command error rate (0.0 to 1.0).
    pub fn command_error_rate(&self) -> f64 {
        let errors = self.command_errors_total() as f64;
        let total = self.commands_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            errors / total
        }
    }

    /// Render a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Session Summary:\n\
             Commands: {}\n\
             Errors: {} ({:.2}% error rate)\n\
             Rejected Inputs: {}\n\
             Validation Errors: {}",
            self.commands_total(),
            self.command_errors_total(),
            self.command_error_rate() * 100.0,
            self.rejected_inputs_total(),
            self.validation_errors_total(),
        )
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

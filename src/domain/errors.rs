//! Domain layer error types
//!
//! Errors raised by the checklist operations the collaborator performs.

use std::time::Duration;

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation failed
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A practice was completed too recently
    #[error("Cooldown active: {} remaining", format_remaining(.remaining))]
    CooldownActive { remaining: Duration },

    /// Nothing left to complete
    #[error("All practices are already completed")]
    NothingPending,
}

/// Format a duration as `"Hh Mm"`
pub fn format_remaining(remaining: &Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
}

//! Error types for party-up-reviews
//!
//! Rendering is infallible; the only failure mode the crate owns is
//! caller-side record validation.

use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
}

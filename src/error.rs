//! Error types for u-anneal.

use thiserror::Error;

/// Errors raised while constructing an annealer.
///
/// Score function failures are not represented here: they are returned to
/// the caller as the scorer's own error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnnealError {
    /// A configuration value is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The initial sequence has no elements.
    #[error("initial sequence is empty")]
    EmptySequence,
}

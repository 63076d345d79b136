//! Domain error model.

use thiserror::Error;

/// Result type used across the widget and catalog layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic failures belong here: malformed static data, caller
/// contract violations, commands issued in the wrong state. Browser and
/// dispatch failures have their own error types next to the code that talks
/// to the browser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a malformed catalog entry).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A caller broke a documented precondition (e.g. an out-of-range slide).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was not a valid slug.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A keyed lookup found nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// A command does not apply to the current state (e.g. double submit).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

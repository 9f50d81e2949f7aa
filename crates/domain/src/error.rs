//! Unified error types for the domain layer
//!
//! Provides a common error type for value object construction and entity
//! validation, so adapters never need to fall back to `String` errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a required field is blank or a value exceeds its
    /// allowed length.
    ///
    /// # Example
    /// ```ignore
    /// if title.trim().is_empty() {
    ///     return Err(DomainError::validation("Story title cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

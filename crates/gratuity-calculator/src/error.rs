//! Error handling for calculator operations.
//!
//! This module provides the structured error type returned by the
//! calculator, enabling better error handling and integration with
//! higher-level callers.

use thiserror::Error;

/// Error type for calculator operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// Argument validation errors
    #[error("{message}")]
    InvalidArgument { message: String },
}

impl CalculatorError {
    /// Create an argument validation error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            CalculatorError::InvalidArgument { .. } => "invalid_argument",
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

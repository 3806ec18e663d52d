//! Custom error types for BudgetBook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for BudgetBook operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Key-value store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// A form field was missing, non-numeric, or out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The month is already in the registry
    #[error("Month already selected: {0}")]
    DuplicateMonth(String),

    /// Another record already has an open edit session
    #[error("Expense #{} is already being edited", .editing + 1)]
    EditInProgress { editing: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl BudgetError {
    /// Create a "not found" error for months
    pub fn month_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Month",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense records
    pub fn expense_not_found(index: usize) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: format!("#{}", index + 1),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an input validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for BudgetBook operations
pub type BudgetResult<T> = Result<T, BudgetError>;

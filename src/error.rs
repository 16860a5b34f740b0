//! Custom error types for coffer
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::{ExpenseId, PaymentId};

/// The main error type for coffer operations
#[derive(Error, Debug)]
pub enum CofferError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors outside the store (e.g. export targets)
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unique-key collisions (username, per-user category name)
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The target of a mutation is missing or owned by another user.
    /// The two cases are indistinguishable on purpose: callers learn
    /// nothing about rows they do not own.
    #[error("{entity_type} not found or not owned by this user: {id}")]
    NotFoundOrForbidden {
        entity_type: &'static str,
        id: i64,
    },

    /// Underlying store unreachable or corrupt
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CofferError {
    /// Create a "not found or forbidden" error for expenses
    pub fn expense_not_found(id: ExpenseId) -> Self {
        Self::NotFoundOrForbidden {
            entity_type: "Expense",
            id: id.as_raw(),
        }
    }

    /// Create a "not found or forbidden" error for recurring payments
    pub fn payment_not_found(id: PaymentId) -> Self {
        Self::NotFoundOrForbidden {
            entity_type: "Recurring payment",
            id: id.as_raw(),
        }
    }

    /// Check if this is a "not found or forbidden" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFoundOrForbidden { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate-key error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CofferError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for CofferError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for coffer operations
pub type CofferResult<T> = Result<T, CofferError>;

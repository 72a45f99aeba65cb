//! Unified error types and result handling.
//!
//! Validation errors are raised before any storage round-trip; storage
//! failures are propagated so callers can reconcile local state and surface
//! a transient notification. No error here is fatal to the process.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before reaching the store (empty title, bad date, ...)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Configuration problem (missing or malformed config file/env var)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A record does not exist for the acting user
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// Amount is non-finite or out of the valid range for the operation
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    /// A second completion was attempted on the same calendar day
    #[error("Habit already completed today: {title}")]
    HabitAlreadyCompleted { title: String },

    /// An operation that needs a signed-in user found none
    #[error("No user is signed in")]
    SignedOut,

    /// Storage-layer failure (network/database)
    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a validation failure with a formatted message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

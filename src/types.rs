//! Crate-level error type

use thiserror::Error;

/// Errors surfaced by the stockroom service
#[derive(Debug, Error)]
pub enum StockroomError {
    /// MongoDB driver or connection failure
    #[error("database error: {0}")]
    Database(String),

    /// Request payload failed validation
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O error (listener bind, etc.)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StockroomError>;

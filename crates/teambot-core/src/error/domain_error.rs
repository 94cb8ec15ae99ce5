//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The record store failed; the driver message is preserved for logs.
    #[error("Store error: {0}")]
    StoreError(String),
}

impl DomainError {
    /// Get an error code string for log fields
    pub fn code(&self) -> &'static str {
        match self {
            Self::StoreError(_) => "STORE_ERROR",
        }
    }
}

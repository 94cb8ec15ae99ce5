//! Error handling utilities for repositories

use teambot_core::DomainError;

/// Convert a driver error to a DomainError
pub fn map_store_error(e: mongodb::error::Error) -> DomainError {
    DomainError::StoreError(e.to_string())
}

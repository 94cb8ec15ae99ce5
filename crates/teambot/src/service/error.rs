//! Service layer error type

use teambot_core::DomainError;
use thiserror::Error;

use super::platform::PlatformError;

/// Failures the service cannot turn into a normal user-facing reply.
///
/// These propagate to the dispatcher, which logs them; they never reach
/// Discord as raw errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

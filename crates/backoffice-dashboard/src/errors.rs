//! Dashboard error types
//!
//! [`GuardError`] is what the authorization guard reports internally.
//! [`DashboardError`] is the only error that crosses the API boundary: it
//! carries a category and nothing else, so collaborator detail never leaks
//! to callers.

use backoffice_core::BackofficeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authorization guard failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuardError {
    /// Session does not resolve to a user
    #[error("Invalid session")]
    InvalidSession,

    /// User lacks the admin role, or the role lookup failed
    #[error("Permission denied")]
    PermissionDenied,
}

/// Opaque error category returned to dashboard callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum DashboardError {
    /// Caller is not an authenticated administrator
    #[error("Permission Denied")]
    PermissionDenied,

    /// Request parameter failed validation
    #[error("Invalid Argument")]
    InvalidArgument,

    /// A collaborator returned an inconsistent result
    #[error("Invalid State")]
    InvalidState,

    /// A collaborator call failed
    #[error("Internal Error")]
    InternalError,
}

impl From<GuardError> for DashboardError {
    // Both guard outcomes look the same from outside
    fn from(_: GuardError) -> Self {
        Self::PermissionDenied
    }
}

impl From<BackofficeError> for DashboardError {
    fn from(err: BackofficeError) -> Self {
        match err {
            BackofficeError::Invalid { .. } => Self::InvalidArgument,
            BackofficeError::InvalidState { .. } => Self::InvalidState,
            BackofficeError::PermissionDenied { .. } => Self::PermissionDenied,
            BackofficeError::NotFound { .. }
            | BackofficeError::Network { .. }
            | BackofficeError::Storage { .. }
            | BackofficeError::Internal { .. } => Self::InternalError,
        }
    }
}

/// Result type for dashboard API operations
pub type DashboardResult<T> = std::result::Result<T, DashboardError>;

//! Session store effect interface
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: session store adapter owned by the embedding service
//! - **Usage**: Authorization guard, user counters
//!
//! Expiry and refresh are owned by the session store; this interface only
//! reads.

use crate::errors::Result;
use crate::identifiers::{SessionId, UserId};
use async_trait::async_trait;

/// Read access to the session store
#[async_trait]
pub trait SessionEffects: Send + Sync {
    /// Resolve a session to the user it belongs to
    ///
    /// Returns `UserId(0)` or an error when the session is unknown or expired.
    async fn resolve_user(&self, session_id: &SessionId) -> Result<UserId>;

    /// Number of currently connected sessions
    async fn count_connected(&self) -> Result<u64>;
}

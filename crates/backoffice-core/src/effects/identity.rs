//! Identity and role effect interface
//!
//! # Effect Classification
//!
//! - **Category**: Application Effect
//! - **Implementation**: user/role tables of the relational database
//! - **Usage**: Authorization guard, user counters

use crate::errors::Result;
use crate::identifiers::{RoleName, UserId};
use async_trait::async_trait;

/// User directory and role membership
#[async_trait]
pub trait IdentityEffects: Send + Sync {
    /// Whether `user_id` holds `role`
    async fn has_role(&self, user_id: UserId, role: &RoleName) -> Result<bool>;

    /// Total number of registered users
    async fn count_users(&self) -> Result<u64>;
}

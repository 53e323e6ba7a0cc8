//! Session, user, role and wallet identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session identifier taken from the session cookie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a raw cookie value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw cookie value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the cookie was absent or empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// User identity resolved from a session
///
/// `UserId(0)` is the session store's "no identity" value and never
/// names a real user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
    /// Whether this id names an actual user
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named permission attached to a user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleName(String);

impl RoleName {
    /// Role granting access to operational endpoints
    pub const ADMIN: &'static str = "admin";

    /// Create a role name
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The `admin` role
    pub fn admin() -> Self {
        Self::new(Self::ADMIN)
    }

    /// Role name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wallet chain name as reported by the wallet service (e.g. `bitcoin-mainnet`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainName(String);

impl ChainName {
    /// Create a chain name
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Chain name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for empty or whitespace-only names
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChainName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_zero_is_not_valid() {
        assert!(!UserId(0).is_valid());
        assert!(UserId(42).is_valid());
    }

    #[test]
    fn test_blank_chain_name() {
        assert!(ChainName::new("").is_blank());
        assert!(ChainName::new("  \t").is_blank());
        assert!(!ChainName::new("bitcoin-mainnet").is_blank());
    }

    #[test]
    fn test_identifiers_serialize_transparently() {
        let json = serde_json::to_string(&ChainName::new("liquid-mainnet")).unwrap();
        assert_eq!(json, "\"liquid-mainnet\"");
        assert_eq!(serde_json::to_string(&UserId(7)).unwrap(), "7");
    }
}

//! Backoffice Core
//!
//! Foundation types for the backoffice dashboard: identifiers, the unified
//! error type, fixed-point amounts, status and wallet data model, and the
//! effect interfaces through which the dashboard reaches its collaborators
//! (session store, identity tables, log store, ledger, wallet service).
//!
//! This crate performs no I/O of its own beyond reading configuration files.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Fixed-point amounts with 8 fractional digits
pub mod amount;

/// TOML configuration
pub mod config;

/// Collaborator effect interfaces
pub mod effects;

/// Unified error handling
pub mod errors;

/// Session, user, role and chain identifiers
pub mod identifiers;

/// Status snapshot types
pub mod status;

/// Wallet service data model
pub mod wallet;

pub use amount::{normalize, Amount, AMOUNT_SCALE};
pub use config::{BackofficeConfig, DashboardConfig, LoggingConfig};
pub use errors::{BackofficeError, Result};
pub use identifiers::{ChainName, RoleName, SessionId, UserId};
pub use rust_decimal::Decimal;
pub use status::{
    AccountingSnapshot, BatchCounters, CurrencyBalance, LogCounters, ReserveSnapshot,
    StatusSnapshot, UserCounters, WithdrawCounters,
};
pub use wallet::{LockedInfo, TotalInfo, WalletInfo, WalletStatus, WalletUtxo};

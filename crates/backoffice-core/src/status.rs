//! Status snapshot types
//!
//! Point-in-time composites built per request from collaborator reads.
//! Field names follow the dashboard reply document.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::wallet::WalletStatus;

/// Log severity counters from the log store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogCounters {
    /// Number of warning entries
    pub warnings: u64,
    /// Number of error entries
    pub errors: u64,
    /// Number of panic entries
    pub panics: u64,
}

/// Registered user and live session counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCounters {
    /// Total registered users
    pub count: u64,
    /// Currently connected sessions
    pub connected: u64,
}

/// Balance and locked amount for one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    /// Currency code (e.g. `BTC`, `LBTC`, `CHF`)
    pub currency: String,
    /// Total balance held in accounts of this currency
    pub balance: Amount,
    /// Portion of the balance currently locked
    pub locked: Amount,
}

/// Ledger account overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingSnapshot {
    /// Number of accounts
    pub count: u64,
    /// Number of active accounts
    pub active: u64,
    /// Per-currency balances, in ledger order
    pub balances: Vec<CurrencyBalance>,
}

/// Batch processing counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCounters {
    /// Total batches
    pub count: u64,
    /// Batches still processing
    pub processing: u64,
}

/// Withdrawal processing counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawCounters {
    /// Total withdrawals
    pub count: u64,
    /// Withdrawals still processing
    pub processing: u64,
}

/// On-chain reserve summary across all wallets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveSnapshot {
    /// One entry per wallet, in wallet service order
    pub wallets: Vec<WalletStatus>,
}

/// Complete dashboard status
///
/// Only ever built with all five parts present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub logs: LogCounters,
    pub users: UserCounters,
    pub accounting: AccountingSnapshot,
    pub batch: BatchCounters,
    pub withdraw: WithdrawCounters,
    pub reserve: ReserveSnapshot,
}

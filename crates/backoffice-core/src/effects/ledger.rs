//! Ledger effect interface
//!
//! # Effect Classification
//!
//! - **Category**: Application Effect
//! - **Implementation**: accounting, batch and withdraw tables
//! - **Usage**: Status aggregation
//!
//! Amounts returned here are already normalized by [`crate::Amount`].

use crate::errors::Result;
use crate::status::{AccountingSnapshot, BatchCounters, WithdrawCounters};
use async_trait::async_trait;

/// Read-only snapshots of ledger state
#[async_trait]
pub trait LedgerEffects: Send + Sync {
    /// Account counts and per-currency balances
    async fn accounts_info(&self) -> Result<AccountingSnapshot>;

    /// Batch totals and batches still processing
    async fn batches_info(&self) -> Result<BatchCounters>;

    /// Withdraw totals and withdraws still processing
    async fn withdraws_info(&self) -> Result<WithdrawCounters>;
}

//! Wallet service data model

use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::identifiers::ChainName;

/// Unspent output reported by the wallet service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletUtxo {
    pub amount: Amount,
    pub locked: bool,
}

impl WalletUtxo {
    pub fn new(amount: Amount, locked: bool) -> Self {
        Self { amount, locked }
    }
}

/// One wallet and its UTXO set, as returned by the wallet service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub chain: ChainName,
    pub utxos: Vec<WalletUtxo>,
}

/// All UTXOs of a wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalInfo {
    /// Number of UTXOs
    pub utxos: u64,
    /// Sum of UTXO amounts
    pub amount: Amount,
}

/// Locked UTXOs of a wallet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedInfo {
    /// Number of locked UTXOs
    pub utxos: u64,
    /// Sum of locked UTXO amounts
    pub amount: Amount,
}

/// Per-wallet reserve summary derived from its UTXO list
///
/// `total` always dominates `locked` in both count and amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletStatus {
    pub chain: ChainName,
    pub total: TotalInfo,
    pub locked: LockedInfo,
}

//! Wallet service effect interface
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: RPC client for the external wallet service
//! - **Usage**: Reserve snapshot, wallet directory

use crate::errors::Result;
use crate::identifiers::ChainName;
use crate::wallet::WalletInfo;
use async_trait::async_trait;

/// UTXO-level view of the platform's wallets
#[async_trait]
pub trait WalletEffects: Send + Sync {
    /// Wallet status, optionally filtered to a single chain
    ///
    /// With `None` every known wallet is returned in service order.
    async fn wallet_status(&self, chain: Option<&ChainName>) -> Result<Vec<WalletInfo>>;
}

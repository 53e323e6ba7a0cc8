//! Request and reply types of the dashboard RPC service

use backoffice_core::{ChainName, LockedInfo, SessionId, StatusSnapshot, TotalInfo, WalletUtxo};
use serde::{Deserialize, Serialize};

use crate::directory::WalletDetail;

/// Per-request data supplied by the transport
///
/// The transport extracts the session cookie; an absent cookie becomes an
/// empty [`SessionId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub session_id: SessionId,
    pub remote_addr: Option<String>,
}

impl RequestContext {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: SessionId::new(session_id),
            remote_addr: None,
        }
    }

    pub fn with_remote_addr(mut self, remote_addr: impl Into<String>) -> Self {
        self.remote_addr = Some(remote_addr.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub status: StatusSnapshot,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletListRequest {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletListResponse {
    pub wallets: Vec<ChainName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDetailRequest {
    /// Chain name of the wallet to inspect
    #[serde(default, alias = "Wallet")]
    pub wallet: String,
}

impl WalletDetailRequest {
    pub fn new(wallet: impl Into<String>) -> Self {
        Self {
            wallet: wallet.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDetailResponse {
    pub wallet: ChainName,
    pub utxos: Vec<WalletUtxo>,
    pub total: TotalInfo,
    pub locked: LockedInfo,
}

impl From<WalletDetail> for WalletDetailResponse {
    fn from(detail: WalletDetail) -> Self {
        Self {
            wallet: detail.status.chain,
            utxos: detail.utxos,
            total: detail.status.total,
            locked: detail.status.locked,
        }
    }
}

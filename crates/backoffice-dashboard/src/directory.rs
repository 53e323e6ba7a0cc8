//! Wallet directory
//!
//! Lists the wallets known to the wallet service and inspects one wallet at
//! UTXO level. [`fold_wallet`] is also used by the status aggregator to
//! build the reserve snapshot.

use backoffice_core::effects::WalletEffects;
use backoffice_core::{
    BackofficeError, ChainName, LockedInfo, Result, TotalInfo, WalletInfo, WalletStatus,
    WalletUtxo,
};
use tracing::{debug, error};

/// One wallet with its UTXOs and their summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletDetail {
    pub status: WalletStatus,
    /// UTXOs in wallet service order
    pub utxos: Vec<WalletUtxo>,
}

/// Partition a wallet's UTXOs by lock state and sum each side.
///
/// Amounts are already 8-digit fixed point, so the sums are exact.
/// Negative amounts are rejected: they would break `total >= locked`.
pub fn fold_wallet(wallet: &WalletInfo) -> Result<WalletStatus> {
    let mut total = TotalInfo::default();
    let mut locked = LockedInfo::default();

    for utxo in &wallet.utxos {
        if utxo.amount.is_negative() {
            return Err(BackofficeError::internal(format!(
                "negative utxo amount {} in wallet {}",
                utxo.amount, wallet.chain
            )));
        }

        total.utxos += 1;
        total.amount = total.amount.checked_add(utxo.amount)?;

        if utxo.locked {
            locked.utxos += 1;
            locked.amount = locked.amount.checked_add(utxo.amount)?;
        }
    }

    Ok(WalletStatus {
        chain: wallet.chain.clone(),
        total,
        locked,
    })
}

/// Chain names of every wallet, in wallet service order
pub async fn list_wallets<E>(effects: &E) -> Result<Vec<ChainName>>
where
    E: WalletEffects + ?Sized,
{
    let wallets = effects.wallet_status(None).await.map_err(|err| {
        error!(error = %err, "FetchWalletList failed");
        err
    })?;

    Ok(wallets.into_iter().map(|wallet| wallet.chain).collect())
}

/// UTXO-level detail for the wallet on `chain`
pub async fn wallet_detail<E>(effects: &E, chain: &ChainName) -> Result<WalletDetail>
where
    E: WalletEffects + ?Sized,
{
    if chain.is_blank() {
        return Err(BackofficeError::invalid("wallet name is empty"));
    }

    let wallets = effects.wallet_status(Some(chain)).await.map_err(|err| {
        error!(chain = %chain, error = %err, "FetchWalletDetail failed");
        err
    })?;

    let [wallet]: [WalletInfo; 1] = wallets.try_into().map_err(|wallets: Vec<WalletInfo>| {
        BackofficeError::invalid_state(format!(
            "expected exactly one wallet for {chain}, got {}",
            wallets.len()
        ))
    })?;

    if &wallet.chain != chain {
        return Err(BackofficeError::invalid_state(format!(
            "requested wallet {chain}, got {}",
            wallet.chain
        )));
    }

    let status = fold_wallet(&wallet)?;
    debug!(chain = %chain, utxos = status.total.utxos, "Wallet detail fetched");

    Ok(WalletDetail {
        status,
        utxos: wallet.utxos,
    })
}

//! Status aggregator
//!
//! Builds a [`StatusSnapshot`] from five independent sources:
//!
//! ```text
//! logs ─────────┐
//! users ────────┤
//! accounting ───┼── try_join ──► StatusSnapshot
//! batch/withdraw┤
//! reserve ──────┘
//! ```
//!
//! All sources are polled concurrently on the request task. The join
//! completes once every source succeeded, or as soon as one fails; a
//! failure drops the sources still in flight and discards those already
//! done, so callers never see a partial snapshot.

use std::future::Future;

use backoffice_core::effects::{
    DashboardEffects, IdentityEffects, LedgerEffects, SessionEffects, WalletEffects,
};
use backoffice_core::{
    BatchCounters, ReserveSnapshot, Result, StatusSnapshot, UserCounters, WithdrawCounters,
};
use tracing::{debug, error};

use crate::directory::fold_wallet;

/// Fetch and merge the full dashboard status
pub async fn fetch_status<E>(effects: &E) -> Result<StatusSnapshot>
where
    E: DashboardEffects + ?Sized,
{
    let (logs, users, accounting, (batch, withdraw), reserve) = tokio::try_join!(
        source("logs", effects.log_counters()),
        source("users", fetch_user_counters(effects)),
        source("accounting", effects.accounts_info()),
        source("batch", fetch_processing_counters(effects)),
        source("reserve", fetch_reserve(effects)),
    )?;

    Ok(StatusSnapshot {
        logs,
        users,
        accounting,
        batch,
        withdraw,
        reserve,
    })
}

async fn source<T, F>(name: &'static str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match fut.await {
        Ok(value) => {
            debug!(source = name, "Status source ready");
            Ok(value)
        }
        Err(err) => {
            error!(source = name, error = %err, "Status source failed");
            Err(err)
        }
    }
}

async fn fetch_user_counters<E>(effects: &E) -> Result<UserCounters>
where
    E: SessionEffects + IdentityEffects + ?Sized,
{
    let (count, connected) = tokio::try_join!(effects.count_users(), effects.count_connected())?;
    Ok(UserCounters { count, connected })
}

async fn fetch_processing_counters<E>(effects: &E) -> Result<(BatchCounters, WithdrawCounters)>
where
    E: LedgerEffects + ?Sized,
{
    tokio::try_join!(effects.batches_info(), effects.withdraws_info())
}

async fn fetch_reserve<E>(effects: &E) -> Result<ReserveSnapshot>
where
    E: WalletEffects + ?Sized,
{
    let wallets = effects
        .wallet_status(None)
        .await?
        .iter()
        .map(fold_wallet)
        .collect::<Result<Vec<_>>>()?;

    Ok(ReserveSnapshot { wallets })
}

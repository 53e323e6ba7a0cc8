//! Supertraits for common effect combinations

use super::{IdentityEffects, LedgerEffects, LogEffects, SessionEffects, WalletEffects};

/// Every collaborator the dashboard talks to
///
/// Combines session, identity, log, ledger and wallet effects.
pub trait DashboardEffects:
    SessionEffects + IdentityEffects + LogEffects + LedgerEffects + WalletEffects
{
}

/// Automatic implementation for types that satisfy the required bounds
impl<T> DashboardEffects for T where
    T: SessionEffects + IdentityEffects + LogEffects + LedgerEffects + WalletEffects
{
}

//! Collaborator effect interfaces
//!
//! Narrow async traits for the session store, identity tables, log store,
//! ledger and wallet service. Implementations live outside this crate;
//! tests use the deterministic handlers from `backoffice-testkit`.

pub mod identity;
pub mod ledger;
pub mod logs;
pub mod session;
pub mod supertraits;
pub mod wallet;

pub use identity::IdentityEffects;
pub use ledger::LedgerEffects;
pub use logs::LogEffects;
pub use session::SessionEffects;
pub use supertraits::DashboardEffects;
pub use wallet::WalletEffects;

//! Backoffice Dashboard
//!
//! Admin-only operational view of the ledger/wallet platform.
//!
//! Each request passes the authorization guard before any other
//! collaborator is touched, then fans out to the session store, identity
//! tables, log store, ledger and wallet service. Results are merged
//! all-or-nothing: one failing source fails the request and no partial
//! status is ever returned.
//!
//! ```text
//! DashboardService ─► guard::authorize ─► aggregator::fetch_status
//!                                      └► directory::{list_wallets, wallet_detail}
//! ```

#![allow(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregator;
pub mod api;
pub mod directory;
pub mod errors;
pub mod guard;
pub mod logging;

pub use api::{
    DashboardService, RequestContext, StatusRequest, StatusResponse, WalletDetailRequest,
    WalletDetailResponse, WalletListRequest, WalletListResponse,
};
pub use errors::{DashboardError, DashboardResult, GuardError};
pub use guard::AuthorizedUser;
pub use logging::init_tracing;

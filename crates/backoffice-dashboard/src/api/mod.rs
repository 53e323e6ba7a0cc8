//! Dashboard RPC surface
//!
//! Three admin-only entry points: `Status`, `WalletList` and `WalletDetail`.

pub mod service;
pub mod types;

pub use service::DashboardService;
pub use types::{
    RequestContext, StatusRequest, StatusResponse, WalletDetailRequest, WalletDetailResponse,
    WalletListRequest, WalletListResponse,
};

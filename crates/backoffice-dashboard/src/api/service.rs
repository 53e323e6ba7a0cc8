//! Dashboard Service - Admin-only status and wallet endpoints
//!
//! Every handler follows the same template: open a request span, run the
//! authorization guard, delegate under the request deadline, and map the
//! outcome onto [`DashboardError`]. Collaborator detail is logged, never
//! returned.

use std::future::Future;
use std::sync::Arc;

use backoffice_core::effects::DashboardEffects;
use backoffice_core::{BackofficeError, ChainName, DashboardConfig, Result};
use tracing::{error, warn, Instrument};

use super::types::{
    RequestContext, StatusRequest, StatusResponse, WalletDetailRequest, WalletDetailResponse,
    WalletListRequest, WalletListResponse,
};
use crate::errors::{DashboardError, DashboardResult};
use crate::guard::{self, AuthorizedUser};
use crate::logging::request_span;
use crate::{aggregator, directory};

/// Dashboard RPC service
pub struct DashboardService<E: ?Sized> {
    effects: Arc<E>,
    config: DashboardConfig,
}

impl<E: ?Sized> Clone for DashboardService<E> {
    fn clone(&self) -> Self {
        Self {
            effects: Arc::clone(&self.effects),
            config: self.config.clone(),
        }
    }
}

impl<E: ?Sized> std::fmt::Debug for DashboardService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<E> DashboardService<E>
where
    E: DashboardEffects + ?Sized,
{
    pub fn new(effects: Arc<E>, config: DashboardConfig) -> Self {
        Self { effects, config }
    }

    /// Full platform status
    pub async fn status(
        &self,
        ctx: &RequestContext,
        _request: StatusRequest,
    ) -> DashboardResult<StatusResponse> {
        async move {
            self.authorize(ctx).await?;

            let status = self
                .with_deadline(aggregator::fetch_status(self.effects.as_ref()))
                .await
                .map_err(|err| reject("FetchDashboardStatus failed", err))?;

            Ok(StatusResponse { status })
        }
        .instrument(request_span("Status", ctx))
        .await
    }

    /// Chain names of every wallet
    pub async fn wallet_list(
        &self,
        ctx: &RequestContext,
        _request: WalletListRequest,
    ) -> DashboardResult<WalletListResponse> {
        async move {
            self.authorize(ctx).await?;

            let wallets = self
                .with_deadline(directory::list_wallets(self.effects.as_ref()))
                .await
                .map_err(|err| reject("FetchWalletList failed", err))?;

            Ok(WalletListResponse { wallets })
        }
        .instrument(request_span("WalletList", ctx))
        .await
    }

    /// UTXO-level detail of one wallet
    pub async fn wallet_detail(
        &self,
        ctx: &RequestContext,
        request: WalletDetailRequest,
    ) -> DashboardResult<WalletDetailResponse> {
        async move {
            self.authorize(ctx).await?;

            let chain = ChainName::new(request.wallet);
            let detail = self
                .with_deadline(directory::wallet_detail(self.effects.as_ref(), &chain))
                .await
                .map_err(|err| reject("FetchWalletDetail failed", err))?;

            Ok(WalletDetailResponse::from(detail))
        }
        .instrument(request_span("WalletDetail", ctx))
        .await
    }

    async fn authorize(&self, ctx: &RequestContext) -> DashboardResult<AuthorizedUser> {
        guard::authorize(self.effects.as_ref(), &ctx.session_id)
            .await
            .map_err(|err| {
                warn!(error = %err, "Authorization failed");
                DashboardError::from(err)
            })
    }

    /// Run `fut` under the request deadline; elapsing drops it and everything it awaits
    async fn with_deadline<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let timeout = self.config.request_timeout();
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(BackofficeError::internal(format!(
                "request deadline of {}ms exceeded",
                timeout.as_millis()
            ))),
        }
    }
}

fn reject(message: &'static str, err: BackofficeError) -> DashboardError {
    error!(error = %err, "{message}");
    DashboardError::from(err)
}

//! Mock collaborator effects for deterministic testing
//!
//! `MockEffects` implements every dashboard collaborator trait over
//! in-memory state. Each call is counted, any call can be made to fail, and
//! any call can be delayed so tests can observe concurrency and
//! cancellation.
//!
//! # Blocking Lock Usage
//!
//! Uses `std::sync::Mutex`; the lock is never held across an await point.

#![allow(clippy::disallowed_types)]

use async_trait::async_trait;
use backoffice_core::effects::{
    IdentityEffects, LedgerEffects, LogEffects, SessionEffects, WalletEffects,
};
use backoffice_core::{
    AccountingSnapshot, BackofficeError, BatchCounters, ChainName, LogCounters, Result, RoleName,
    SessionId, UserId, WalletInfo, WithdrawCounters,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Collaborator call observed by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    ResolveUser,
    CountConnected,
    HasRole,
    CountUsers,
    LogCounters,
    AccountsInfo,
    BatchesInfo,
    WithdrawsInfo,
    WalletStatus,
}

impl Call {
    /// Calls the authorization guard makes
    pub const GUARD: [Call; 2] = [Call::ResolveUser, Call::HasRole];

    /// Every call made after authorization
    pub const DOWNSTREAM: [Call; 7] = [
        Call::CountConnected,
        Call::CountUsers,
        Call::LogCounters,
        Call::AccountsInfo,
        Call::BatchesInfo,
        Call::WithdrawsInfo,
        Call::WalletStatus,
    ];
}

#[derive(Debug, Default)]
struct MockState {
    sessions: HashMap<SessionId, UserId>,
    roles: HashMap<UserId, HashSet<RoleName>>,
    users: u64,
    connected: u64,
    logs: LogCounters,
    accounting: AccountingSnapshot,
    batches: BatchCounters,
    withdraws: WithdrawCounters,
    wallets: Vec<WalletInfo>,
    /// Replaces the filtered result of a single-chain wallet query
    detail_override: Option<Vec<WalletInfo>>,
    failures: HashMap<Call, BackofficeError>,
    delays: HashMap<Call, Duration>,
    started: HashMap<Call, usize>,
    completed: HashMap<Call, usize>,
    wallet_filters: Vec<Option<ChainName>>,
}

/// In-memory implementation of every dashboard collaborator
#[derive(Debug, Clone, Default)]
pub struct MockEffects {
    state: Arc<Mutex<MockState>>,
}

impl MockEffects {
    /// Empty collaborators: no sessions, no wallets, all counters zero
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A poisoned lock only means another test thread panicked
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Register a session for a user
    pub fn with_session(self, session_id: &str, user_id: UserId) -> Self {
        self.state().sessions.insert(SessionId::new(session_id), user_id);
        self
    }

    /// Grant a role to a user
    pub fn with_role(self, user_id: UserId, role: &str) -> Self {
        self.state()
            .roles
            .entry(user_id)
            .or_default()
            .insert(RoleName::new(role));
        self
    }

    /// Set registered user and connected session counts
    pub fn with_user_counts(self, users: u64, connected: u64) -> Self {
        {
            let mut state = self.state();
            state.users = users;
            state.connected = connected;
        }
        self
    }

    pub fn with_logs(self, logs: LogCounters) -> Self {
        self.state().logs = logs;
        self
    }

    pub fn with_accounting(self, accounting: AccountingSnapshot) -> Self {
        self.state().accounting = accounting;
        self
    }

    pub fn with_batches(self, batches: BatchCounters) -> Self {
        self.state().batches = batches;
        self
    }

    pub fn with_withdraws(self, withdraws: WithdrawCounters) -> Self {
        self.state().withdraws = withdraws;
        self
    }

    /// Append a wallet; order of insertion is the service order
    pub fn with_wallet(self, wallet: WalletInfo) -> Self {
        self.state().wallets.push(wallet);
        self
    }

    /// Force the result of single-wallet queries regardless of the filter
    pub fn with_detail_override(self, wallets: Vec<WalletInfo>) -> Self {
        self.state().detail_override = Some(wallets);
        self
    }

    /// Make every future `call` fail with `error`
    pub fn fail(&self, call: Call, error: BackofficeError) {
        self.state().failures.insert(call, error);
    }

    /// Builder form of [`MockEffects::fail`]
    pub fn failing(self, call: Call, error: BackofficeError) -> Self {
        self.fail(call, error);
        self
    }

    /// Delay every future `call` by `delay` before it answers
    pub fn delay(&self, call: Call, delay: Duration) {
        self.state().delays.insert(call, delay);
    }

    /// Builder form of [`MockEffects::delay`]
    pub fn delayed(self, call: Call, delay: Duration) -> Self {
        self.delay(call, delay);
        self
    }

    /// Number of times `call` was entered
    pub fn calls(&self, call: Call) -> usize {
        self.state().started.get(&call).copied().unwrap_or(0)
    }

    /// Number of times `call` ran to completion
    pub fn completed(&self, call: Call) -> usize {
        self.state().completed.get(&call).copied().unwrap_or(0)
    }

    /// Total calls entered across `calls`
    pub fn calls_to(&self, calls: &[Call]) -> usize {
        calls.iter().map(|c| self.calls(*c)).sum()
    }

    /// Filters passed to `wallet_status`, in call order
    pub fn wallet_filters(&self) -> Vec<Option<ChainName>> {
        self.state().wallet_filters.clone()
    }

    async fn enter(&self, call: Call) -> Result<()> {
        let delay = {
            let mut state = self.state();
            *state.started.entry(call).or_insert(0) += 1;
            state.delays.get(&call).copied()
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state();
        *state.completed.entry(call).or_insert(0) += 1;
        match state.failures.get(&call) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SessionEffects for MockEffects {
    async fn resolve_user(&self, session_id: &SessionId) -> Result<UserId> {
        self.enter(Call::ResolveUser).await?;
        Ok(self
            .state()
            .sessions
            .get(session_id)
            .copied()
            .unwrap_or(UserId(0)))
    }

    async fn count_connected(&self) -> Result<u64> {
        self.enter(Call::CountConnected).await?;
        Ok(self.state().connected)
    }
}

#[async_trait]
impl IdentityEffects for MockEffects {
    async fn has_role(&self, user_id: UserId, role: &RoleName) -> Result<bool> {
        self.enter(Call::HasRole).await?;
        Ok(self
            .state()
            .roles
            .get(&user_id)
            .is_some_and(|roles| roles.contains(role)))
    }

    async fn count_users(&self) -> Result<u64> {
        self.enter(Call::CountUsers).await?;
        Ok(self.state().users)
    }
}

#[async_trait]
impl LogEffects for MockEffects {
    async fn log_counters(&self) -> Result<LogCounters> {
        self.enter(Call::LogCounters).await?;
        Ok(self.state().logs)
    }
}

#[async_trait]
impl LedgerEffects for MockEffects {
    async fn accounts_info(&self) -> Result<AccountingSnapshot> {
        self.enter(Call::AccountsInfo).await?;
        Ok(self.state().accounting.clone())
    }

    async fn batches_info(&self) -> Result<BatchCounters> {
        self.enter(Call::BatchesInfo).await?;
        Ok(self.state().batches)
    }

    async fn withdraws_info(&self) -> Result<WithdrawCounters> {
        self.enter(Call::WithdrawsInfo).await?;
        Ok(self.state().withdraws)
    }
}

#[async_trait]
impl WalletEffects for MockEffects {
    async fn wallet_status(&self, chain: Option<&ChainName>) -> Result<Vec<WalletInfo>> {
        self.state().wallet_filters.push(chain.cloned());
        self.enter(Call::WalletStatus).await?;

        let state = self.state();
        let wallets = match chain {
            None => state.wallets.clone(),
            Some(chain) => match &state.detail_override {
                Some(forced) => forced.clone(),
                None => state
                    .wallets
                    .iter()
                    .filter(|w| &w.chain == chain)
                    .cloned()
                    .collect(),
            },
        };
        Ok(wallets)
    }
}

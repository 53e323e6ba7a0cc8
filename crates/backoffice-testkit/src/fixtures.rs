//! Canned collaborator state shared by dashboard tests

use crate::mock_effects::MockEffects;
use backoffice_core::{
    AccountingSnapshot, Amount, BatchCounters, ChainName, CurrencyBalance, LogCounters, UserId,
    WalletInfo, WalletUtxo, WithdrawCounters,
};

/// Session owned by an administrator
pub const ADMIN_SESSION: &str = "session-admin";
/// Session owned by a user without the admin role
pub const USER_SESSION: &str = "session-user";

pub const ADMIN_USER: UserId = UserId(1);
pub const PLAIN_USER: UserId = UserId(2);

/// Parse an amount literal
///
/// Panics on malformed input; fixtures only use literals.
pub fn amount(value: &str) -> Amount {
    match value.parse() {
        Ok(amount) => amount,
        Err(err) => panic!("bad fixture amount {value:?}: {err}"),
    }
}

pub fn utxo(value: &str, locked: bool) -> WalletUtxo {
    WalletUtxo::new(amount(value), locked)
}

pub fn wallet(chain: &str, utxos: Vec<WalletUtxo>) -> WalletInfo {
    WalletInfo {
        chain: ChainName::new(chain),
        utxos,
    }
}

pub fn balance(currency: &str, balance: &str, locked: &str) -> CurrencyBalance {
    CurrencyBalance {
        currency: currency.to_string(),
        balance: amount(balance),
        locked: amount(locked),
    }
}

/// Collaborators with one admin, one plain user and no data
pub fn with_sessions() -> MockEffects {
    MockEffects::new()
        .with_session(ADMIN_SESSION, ADMIN_USER)
        .with_session(USER_SESSION, PLAIN_USER)
        .with_role(ADMIN_USER, "admin")
        .with_role(PLAIN_USER, "user")
}

/// Fully populated platform: every status source reports non-zero data
pub fn populated() -> MockEffects {
    with_sessions()
        .with_user_counts(1_204, 37)
        .with_logs(LogCounters {
            warnings: 12,
            errors: 3,
            panics: 1,
        })
        .with_accounting(AccountingSnapshot {
            count: 2_310,
            active: 1_877,
            balances: vec![
                balance("CHF", "152000.5", "1200"),
                balance("BTC", "12.345678912", "0.5"),
                balance("LBTC", "3.1", "0"),
            ],
        })
        .with_batches(BatchCounters {
            count: 88,
            processing: 2,
        })
        .with_withdraws(WithdrawCounters {
            count: 412,
            processing: 5,
        })
        .with_wallet(wallet(
            "bitcoin-mainnet",
            vec![utxo("1.23456789", false), utxo("0.00000001", true)],
        ))
        .with_wallet(wallet(
            "liquid-mainnet",
            vec![utxo("0.5", true), utxo("0.25", true), utxo("2", false)],
        ))
}

//! End-to-end tests of the dashboard service against mock collaborators

use std::sync::Arc;
use std::time::Duration;

use backoffice_core::{BackofficeError, DashboardConfig};
use backoffice_dashboard::{
    DashboardError, DashboardService, RequestContext, StatusRequest, WalletDetailRequest,
    WalletListRequest,
};
use backoffice_testkit::fixtures::{self, utxo, wallet, ADMIN_SESSION, USER_SESSION};
use backoffice_testkit::{init_test_tracing, Call, MockEffects};

fn service(effects: &MockEffects) -> DashboardService<MockEffects> {
    init_test_tracing();
    DashboardService::new(Arc::new(effects.clone()), DashboardConfig::default())
}

fn admin() -> RequestContext {
    RequestContext::new(ADMIN_SESSION).with_remote_addr("10.0.0.7:51234")
}

/// Every entry point, returning only whether it was denied
async fn denied_everywhere(service: &DashboardService<MockEffects>, ctx: &RequestContext) -> bool {
    let status = service.status(ctx, StatusRequest::default()).await;
    let list = service.wallet_list(ctx, WalletListRequest::default()).await;
    let detail = service
        .wallet_detail(ctx, WalletDetailRequest::new("bitcoin-mainnet"))
        .await;

    status == Err(DashboardError::PermissionDenied)
        && list == Err(DashboardError::PermissionDenied)
        && detail == Err(DashboardError::PermissionDenied)
}

#[tokio::test]
async fn non_admin_is_denied_without_downstream_calls() {
    let effects = fixtures::populated();
    let service = service(&effects);

    assert!(denied_everywhere(&service, &RequestContext::new(USER_SESSION)).await);
    assert_eq!(effects.calls_to(&Call::DOWNSTREAM), 0);
}

#[tokio::test]
async fn role_lookup_failure_is_denied_without_downstream_calls() {
    let effects = fixtures::populated()
        .failing(Call::HasRole, BackofficeError::storage("connection reset"));
    let service = service(&effects);

    assert!(denied_everywhere(&service, &admin()).await);
    assert_eq!(effects.calls_to(&Call::DOWNSTREAM), 0);
}

#[tokio::test]
async fn invalid_session_is_denied_without_role_check() {
    let effects = fixtures::populated();
    let service = service(&effects);

    assert!(denied_everywhere(&service, &RequestContext::new("forged")).await);
    assert!(denied_everywhere(&service, &RequestContext::new("")).await);
    assert_eq!(effects.calls(Call::HasRole), 0);
    assert_eq!(effects.calls_to(&Call::DOWNSTREAM), 0);
}

#[tokio::test]
async fn status_merges_all_sources() {
    let effects = fixtures::populated();
    let reply = service(&effects)
        .status(&admin(), StatusRequest::default())
        .await
        .unwrap();

    let status = reply.status;
    assert_eq!(status.logs.warnings, 12);
    assert_eq!(status.users.count, 1_204);
    assert_eq!(status.users.connected, 37);
    assert_eq!(status.accounting.balances.len(), 3);
    assert_eq!(status.batch.count, 88);
    assert_eq!(status.withdraw.processing, 5);
    assert_eq!(status.reserve.wallets.len(), 2);
}

#[tokio::test]
async fn any_failing_source_is_internal_error() {
    for failing in Call::DOWNSTREAM {
        let effects = fixtures::populated()
            .failing(failing, BackofficeError::network("pq: server closed the connection"));
        let result = service(&effects)
            .status(&admin(), StatusRequest::default())
            .await;
        assert_eq!(result, Err(DashboardError::InternalError), "{failing:?}");
    }
}

#[tokio::test]
async fn wallet_detail_reports_rounded_partition() {
    let effects = fixtures::populated();
    let reply = service(&effects)
        .wallet_detail(&admin(), WalletDetailRequest::new("bitcoin-mainnet"))
        .await
        .unwrap();

    assert_eq!(reply.wallet.as_str(), "bitcoin-mainnet");
    assert_eq!(reply.utxos, vec![utxo("1.23456789", false), utxo("0.00000001", true)]);
    assert_eq!(reply.total.utxos, 2);
    assert_eq!(reply.total.amount.to_string(), "1.23456790");
    assert_eq!(reply.locked.utxos, 1);
    assert_eq!(reply.locked.amount.to_string(), "0.00000001");
}

#[tokio::test]
async fn wallet_detail_with_empty_name_is_invalid_argument() {
    let effects = fixtures::populated();
    let result = service(&effects)
        .wallet_detail(&admin(), WalletDetailRequest::new(""))
        .await;

    assert_eq!(result, Err(DashboardError::InvalidArgument));
    assert_eq!(effects.calls(Call::WalletStatus), 0);
}

#[tokio::test]
async fn wallet_detail_cardinality_mismatch_is_invalid_state() {
    let none = fixtures::with_sessions();
    let twice = fixtures::with_sessions()
        .with_wallet(wallet("bitcoin-mainnet", vec![utxo("1", false)]))
        .with_wallet(wallet("bitcoin-mainnet", vec![utxo("1", true)]));

    for effects in [none, twice] {
        let result = service(&effects)
            .wallet_detail(&admin(), WalletDetailRequest::new("bitcoin-mainnet"))
            .await;
        assert_eq!(result, Err(DashboardError::InvalidState));
    }
}

#[tokio::test]
async fn wallet_list_preserves_service_order() {
    let effects = fixtures::with_sessions()
        .with_wallet(wallet("liquid-mainnet", vec![]))
        .with_wallet(wallet("bitcoin-testnet", vec![]))
        .with_wallet(wallet("bitcoin-mainnet", vec![]));
    let reply = service(&effects)
        .wallet_list(&admin(), WalletListRequest::default())
        .await
        .unwrap();

    let names: Vec<&str> = reply.wallets.iter().map(|c| c.as_str()).collect();
    assert_eq!(names, ["liquid-mainnet", "bitcoin-testnet", "bitcoin-mainnet"]);
}

#[tokio::test]
async fn wallet_list_failure_is_internal_error() {
    let effects = fixtures::populated()
        .failing(Call::WalletStatus, BackofficeError::network("connection refused"));
    let result = service(&effects)
        .wallet_list(&admin(), WalletListRequest::default())
        .await;
    assert_eq!(result, Err(DashboardError::InternalError));
}

#[tokio::test(start_paused = true)]
async fn deadline_is_internal_error_and_drops_work() {
    init_test_tracing();
    let effects = fixtures::populated().delayed(Call::AccountsInfo, Duration::from_secs(60));
    let config = DashboardConfig {
        request_timeout_ms: 500,
    };
    let service = DashboardService::new(Arc::new(effects.clone()), config);

    let result = service.status(&admin(), StatusRequest::default()).await;

    assert_eq!(result, Err(DashboardError::InternalError));
    assert_eq!(effects.calls(Call::AccountsInfo), 1);
    assert_eq!(effects.completed(Call::AccountsInfo), 0);
}

#[tokio::test]
async fn status_reply_wire_shape() {
    let effects = fixtures::populated();
    let reply = service(&effects)
        .status(&admin(), StatusRequest::default())
        .await
        .unwrap();

    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["logs"]["panics"], 1);
    assert_eq!(json["users"]["connected"], 37);
    assert_eq!(json["accounting"]["active"], 1_877);
    assert_eq!(json["accounting"]["balances"][0]["currency"], "CHF");
    assert_eq!(json["accounting"]["balances"][0]["balance"], "152000.50000000");
    assert_eq!(json["accounting"]["balances"][0]["locked"], "1200.00000000");
    assert_eq!(json["batch"]["processing"], 2);
    assert_eq!(json["withdraw"]["count"], 412);

    let bitcoin = &json["reserve"]["wallets"][0];
    assert_eq!(bitcoin["chain"], "bitcoin-mainnet");
    assert_eq!(bitcoin["total"]["utxos"], 2);
    assert_eq!(bitcoin["total"]["amount"], "1.23456790");
    assert_eq!(bitcoin["locked"]["utxos"], 1);
    assert_eq!(bitcoin["locked"]["amount"], "0.00000001");
}

#[tokio::test]
async fn wallet_detail_wire_shape() {
    let effects = fixtures::populated();
    let reply = service(&effects)
        .wallet_detail(&admin(), WalletDetailRequest::new("liquid-mainnet"))
        .await
        .unwrap();

    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json["wallet"], "liquid-mainnet");
    assert_eq!(json["utxos"][0]["amount"], "0.50000000");
    assert_eq!(json["utxos"][0]["locked"], true);
    assert_eq!(json["total"]["amount"], "2.75000000");
    assert_eq!(json["locked"]["amount"], "0.75000000");
}

#[test]
fn wallet_detail_request_accepts_legacy_field_name() {
    let request: WalletDetailRequest =
        serde_json::from_str(r#"{"Wallet": "bitcoin-mainnet"}"#).unwrap();
    assert_eq!(request.wallet, "bitcoin-mainnet");
}

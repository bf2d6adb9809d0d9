//! Wallet screen flow with a file-backed preference store and a live mock
//! VRF endpoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use vrf_wallet_bridge::lifecycle::Shutdown;
use vrf_wallet_bridge::network::NetworkSelector;
use vrf_wallet_bridge::preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, NETWORK_ID_KEY,
};
use vrf_wallet_bridge::vrf::{FailureKind, RandomNumberClient, RandomNumberRequest, RandomNumberResult};
use vrf_wallet_bridge::wallet::controller::VRF_PENDING_TEXT;
use vrf_wallet_bridge::wallet::{DetachedWallet, StatusDisplay, WalletController};

mod common;

#[derive(Debug, Default)]
struct Headings(Vec<String>);

impl StatusDisplay for Headings {
    fn set_heading(&mut self, text: &str) {
        self.0.push(text.to_string());
    }
    fn set_login_label(&mut self, _text: &str) {}
    fn set_contract_output(&mut self, _text: &str) {}
}

#[tokio::test]
async fn test_network_choice_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let store: Arc<dyn PreferenceStore> = Arc::new(FilePreferenceStore::open(&path).unwrap());
        let mut controller =
            WalletController::new(DetachedWallet, Headings::default(), NetworkSelector::new(store));
        controller.start().await.unwrap();
        controller.select_network(1).unwrap();
    }

    let store: Arc<dyn PreferenceStore> = Arc::new(FilePreferenceStore::open(&path).unwrap());
    assert_eq!(store.get(NETWORK_ID_KEY), "mainnet");

    let mut controller =
        WalletController::new(DetachedWallet, Headings::default(), NetworkSelector::new(store));
    controller.start().await.unwrap();
    assert_eq!(controller.networks().selected_index(), 1);
}

#[tokio::test]
async fn test_call_vrf_renders_random_number() {
    let (addr, _requests) = common::start_mock_vrf(
        200,
        r#"{"data":{"success":true,"requestId":"r9","transactionHash":"0xdef","url":"https://y","randomNumber":["777","888"]}}"#,
    )
    .await;

    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let client = RandomNumberClient::with_http_client(http, format!("http://{}/vrf", addr));

    let store: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::new());
    let mut controller = WalletController::new(DetachedWallet, Headings::default(), NetworkSelector::new(store));

    let result = controller
        .call_vrf(&client, &RandomNumberRequest::new("fuji", 2, "tok"))
        .await;

    assert!(result.is_success());
    assert_eq!(
        controller.display().0,
        vec!["Requesting random number from VRF.", "Random number: 777"]
    );
}

const SINGLE_VALUE_BODY: &str = r#"{"data":{"success":true,"requestId":"r2","transactionHash":"0x01","url":"https://z","randomNumber":["4242"]}}"#;

fn client_for(addr: SocketAddr) -> RandomNumberClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    RandomNumberClient::with_http_client(http, format!("http://{}/vrf", addr))
}

fn memory_controller() -> WalletController<DetachedWallet, Headings> {
    let store: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::new());
    WalletController::new(DetachedWallet, Headings::default(), NetworkSelector::new(store))
}

#[tokio::test]
async fn test_shutdown_during_call_vrf_keeps_pending_heading() {
    let (addr, _requests) =
        common::start_mock_vrf_with_delay(200, SINGLE_VALUE_BODY, Duration::from_secs(5)).await;
    let client = client_for(addr);
    let shutdown = Arc::new(Shutdown::new());
    let cancel = shutdown.subscribe();

    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.trigger();
    });

    let mut controller = memory_controller();
    let result = tokio::time::timeout(
        Duration::from_secs(2),
        controller.call_vrf_until_cancelled(&client, &RandomNumberRequest::new("fuji", 1, "tok"), cancel),
    )
    .await
    .expect("cancellation should be prompt");

    assert_eq!(
        result,
        RandomNumberResult::Failure {
            kind: FailureKind::Cancelled,
            reason: "cancelled".into(),
        }
    );
    assert_eq!(controller.display().0, vec![VRF_PENDING_TEXT]);
}

#[tokio::test]
async fn test_call_vrf_until_cancelled_renders_value_when_not_cancelled() {
    let (addr, _requests) = common::start_mock_vrf(200, SINGLE_VALUE_BODY).await;
    let shutdown = Shutdown::new();

    let mut controller = memory_controller();
    let result = controller
        .call_vrf_until_cancelled(
            &client_for(addr),
            &RandomNumberRequest::new("fuji", 1, "tok"),
            shutdown.subscribe(),
        )
        .await;

    assert_eq!(result.first_value(), Some("4242"));
    assert_eq!(
        controller.display().0,
        vec![VRF_PENDING_TEXT, "Random number: 4242"]
    );
}

#[tokio::test]
async fn test_network_change_rejected_when_preferences_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let store: Arc<dyn PreferenceStore> = Arc::new(FilePreferenceStore::open(&path).unwrap());
    let mut controller =
        WalletController::new(DetachedWallet, Headings::default(), NetworkSelector::new(store.clone()));
    controller.start().await.unwrap();

    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    assert!(controller.select_network(2).is_err());
    assert_eq!(controller.networks().selected_index(), 0);
    assert_eq!(store.get(NETWORK_ID_KEY), "testnet");
}

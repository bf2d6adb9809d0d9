//! VRF wallet bridge.
//!
//! Loads configuration, restores the persisted network, queries the wallet
//! login state and requests one verifiable random number.
//!
//! ```text
//!   bridge.toml ──▶ config ──▶ preferences (networkId)
//!                                  │
//!                                  ▼
//!                          WalletController ──▶ WalletPlugin
//!                                  │
//!                                  ▼
//!                       RandomNumberClient ──POST──▶ VRF endpoint
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use vrf_wallet_bridge::config::load_or_default;
use vrf_wallet_bridge::lifecycle::{spawn_ctrl_c_handler, Shutdown};
use vrf_wallet_bridge::network::NetworkSelector;
use vrf_wallet_bridge::observability::init_logging;
use vrf_wallet_bridge::preferences::{FilePreferenceStore, PreferenceStore};
use vrf_wallet_bridge::vrf::{RandomNumberClient, RandomNumberRequest};
use vrf_wallet_bridge::wallet::{DetachedWallet, LogDisplay, WalletController};

#[derive(Parser)]
#[command(name = "vrf-wallet-bridge")]
#[command(about = "Request a verifiable random number for the selected network", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = load_or_default(args.config.as_deref())?;

    init_logging(&config.observability.log_level);

    tracing::info!("vrf-wallet-bridge v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        endpoint = %config.vrf.endpoint,
        network = %config.vrf.network,
        num_words = config.vrf.num_words,
        preferences = %config.preferences.path,
        "Configuration loaded"
    );

    let store: Arc<dyn PreferenceStore> = Arc::new(FilePreferenceStore::open(&config.preferences.path)?);
    let mut controller = WalletController::new(DetachedWallet, LogDisplay, NetworkSelector::new(store));
    controller.start().await?;

    let shutdown = Arc::new(Shutdown::new());
    let signal_task = spawn_ctrl_c_handler(shutdown.clone());

    let client = RandomNumberClient::from(&config.vrf);
    let request = RandomNumberRequest::from(&config.vrf);
    if request.auth_token.is_empty() {
        tracing::warn!("No auth token configured; the endpoint will likely reject the request");
    }

    let result = controller
        .call_vrf_until_cancelled(&client, &request, shutdown.subscribe())
        .await;

    signal_task.abort();

    println!("{}", serde_json::to_string_pretty(&result)?);
    tracing::info!(success = result.is_success(), "Done");
    Ok(())
}

use std::sync::Arc;

use clap::{Parser, Subcommand};

use vrf_wallet_bridge::config::schema::{AUTH_TOKEN_ENV_VAR, DEFAULT_VRF_ENDPOINT};
use vrf_wallet_bridge::network::NetworkSelector;
use vrf_wallet_bridge::observability::init_logging;
use vrf_wallet_bridge::preferences::{FilePreferenceStore, PreferenceStore};
use vrf_wallet_bridge::vrf::{RandomNumberClient, RandomNumberRequest};

#[derive(Parser)]
#[command(name = "vrf-cli")]
#[command(about = "Command-line access to the VRF service and saved network", long_about = None)]
struct Cli {
    /// Preferences file holding the selected network.
    #[arg(short, long, default_value = "preferences.json")]
    preferences: String,

    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request random numbers from the VRF endpoint
    Random {
        #[arg(short, long, default_value = DEFAULT_VRF_ENDPOINT)]
        endpoint: String,

        #[arg(short, long, default_value = "fuji")]
        network: String,

        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        num_words: u32,

        /// Authorization header value
        #[arg(short, long, env = AUTH_TOKEN_ENV_VAR, default_value = "", hide_env_values = true)]
        token: String,
    },
    /// Show or change the saved wallet network
    Network {
        #[command(subcommand)]
        action: NetworkAction,
    },
}

#[derive(Subcommand)]
enum NetworkAction {
    /// Print the saved network
    Show,
    /// Save a network (testnet, mainnet, betanet)
    Set { name: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Random {
            endpoint,
            network,
            num_words,
            token,
        } => {
            let client = RandomNumberClient::new(endpoint);
            let request = RandomNumberRequest::new(network, num_words, token);
            let result = client.request_random_number(&request).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Network { action } => {
            let store: Arc<dyn PreferenceStore> = Arc::new(FilePreferenceStore::open(&cli.preferences)?);
            let mut selector = NetworkSelector::new(store);
            selector.initialize()?;
            match action {
                NetworkAction::Show => println!("{}", selector.current_network()),
                NetworkAction::Set { name } => {
                    selector.select_by_name(&name)?;
                    println!("{}", selector.current_network());
                }
            }
        }
    }

    Ok(())
}

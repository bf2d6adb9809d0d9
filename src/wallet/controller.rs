//! Headless wallet screen: forwards user actions to the wallet plugin and
//! renders replies through a [`StatusDisplay`].

use tokio::sync::broadcast;

use crate::network::{NetworkError, NetworkSelector};
use crate::vrf::{RandomNumberClient, RandomNumberRequest, RandomNumberResult};
use crate::wallet::plugin::{ContractCall, WalletError, WalletPlugin};
use crate::wallet::session::WalletSession;

/// Heading shown while a VRF request is in flight.
pub const VRF_PENDING_TEXT: &str = "Requesting random number from VRF.";

/// Output surfaces of the wallet screen.
pub trait StatusDisplay {
    fn set_heading(&mut self, text: &str);
    fn set_login_label(&mut self, text: &str);
    fn set_contract_output(&mut self, text: &str);
}

/// Display that writes every update to the log.
#[derive(Debug, Default)]
pub struct LogDisplay;

impl StatusDisplay for LogDisplay {
    fn set_heading(&mut self, text: &str) {
        tracing::info!(target: "vrf_wallet_bridge::display", heading = %text);
    }

    fn set_login_label(&mut self, text: &str) {
        tracing::info!(target: "vrf_wallet_bridge::display", login_label = %text);
    }

    fn set_contract_output(&mut self, text: &str) {
        tracing::info!(target: "vrf_wallet_bridge::display", contract_output = %text);
    }
}

pub struct WalletController<P, D> {
    plugin: P,
    display: D,
    session: WalletSession,
    networks: NetworkSelector,
}

impl<P: WalletPlugin, D: StatusDisplay> WalletController<P, D> {
    pub fn new(plugin: P, display: D, networks: NetworkSelector) -> Self {
        Self {
            plugin,
            display,
            session: WalletSession::new(),
            networks,
        }
    }

    /// Restore the network selection, then ask the plugin for the login state.
    pub async fn start(&mut self) -> Result<(), NetworkError> {
        self.networks.initialize()?;
        self.refresh_login_status().await;
        Ok(())
    }

    pub fn session(&self) -> &WalletSession {
        &self.session
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn networks(&self) -> &NetworkSelector {
        &self.networks
    }

    pub fn select_network(&mut self, index: usize) -> Result<(), NetworkError> {
        self.networks.select(index)
    }

    fn network(&self) -> String {
        self.networks.current_network()
    }

    // Display updates

    pub fn change_text(&mut self, message: &str) {
        let message = if message.is_empty() { "No Account" } else { message };
        self.display.set_heading(message);
    }

    pub fn change_login_status(&mut self, status: &str) {
        if status == "true" {
            self.session.set_logged_in(true);
            self.display.set_login_label("Logout");
        } else {
            self.session.set_logged_in(false);
            self.display.set_login_label("Login");
        }
        self.change_text(&format!("Login Status: {}", status));
    }

    pub fn update_account_id(&mut self, account_id: &str) {
        let account_id = if account_id.is_empty() { "Zero" } else { account_id };
        self.display.set_heading(account_id);
        self.session.set_account_id(account_id);
    }

    pub fn display_contract(&mut self, json: &str) {
        self.display.set_contract_output(json);
    }

    fn report_error(&mut self, op: &'static str, err: WalletError) {
        tracing::warn!(op, error = %err, "Wallet operation failed");
        self.display.set_heading(&format!("Error: {}", err));
    }

    // Wallet operations

    /// Log in when logged out, log out otherwise, then refresh the status.
    pub async fn login(&mut self) {
        let network = self.network();
        let outcome = if !self.session.is_logged_in() {
            tracing::info!(network = %network, "Logging in");
            self.plugin.login("", &network).await
        } else {
            tracing::info!(network = %network, "Logging out");
            self.plugin.logout(&network).await
        };
        if let Err(e) = outcome {
            self.report_error("login", e);
        }
        self.refresh_login_status().await;
    }

    pub async fn refresh_login_status(&mut self) {
        let network = self.network();
        match self.plugin.login_status(&network).await {
            Ok(status) => self.change_login_status(&status),
            Err(e) => self.report_error("login_status", e),
        }
    }

    pub async fn fetch_account_id(&mut self) {
        let network = self.network();
        match self.plugin.account_id(&network).await {
            Ok(id) => self.update_account_id(&id),
            Err(e) => self.report_error("account_id", e),
        }
    }

    pub async fn fetch_account_balance(&mut self) {
        let network = self.network();
        let account_id = self.session.account_id().to_string();
        match self.plugin.account_balance(&network, &account_id).await {
            Ok(balance) => self.change_text(&balance),
            Err(e) => self.report_error("account_balance", e),
        }
    }

    pub async fn call_contract(&mut self, contract: &str, method: &str, args: &str, change_method: bool) {
        let network = self.network();
        let call = ContractCall {
            contract: contract.to_string(),
            method: method.to_string(),
            args: args.to_string(),
            account_id: self.session.account_id().to_string(),
            change_method,
        };
        match self.plugin.call_contract(&call, &network).await {
            Ok(json) => self.display_contract(&json),
            Err(e) => self.report_error("call_contract", e),
        }
    }

    /// Request a random number and show the first value.
    ///
    /// Failures are logged by the client; the heading keeps the pending text.
    pub async fn call_vrf(
        &mut self,
        client: &RandomNumberClient,
        request: &RandomNumberRequest,
    ) -> RandomNumberResult {
        self.change_text(VRF_PENDING_TEXT);
        let result = client.request_random_number(request).await;
        self.show_random_number(&result);
        result
    }

    /// Like [`call_vrf`](Self::call_vrf), but gives up when `cancel` fires.
    pub async fn call_vrf_until_cancelled(
        &mut self,
        client: &RandomNumberClient,
        request: &RandomNumberRequest,
        cancel: broadcast::Receiver<()>,
    ) -> RandomNumberResult {
        self.change_text(VRF_PENDING_TEXT);
        let result = client.request_until_cancelled(request, cancel).await;
        self.show_random_number(&result);
        result
    }

    fn show_random_number(&mut self, result: &RandomNumberResult) {
        if let Some(value) = result.first_value() {
            self.change_text(&format!("Random number: {}", value));
        }
    }
}

impl<P, D> std::fmt::Debug for WalletController<P, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletController")
            .field("session", &self.session)
            .field("networks", &self.networks)
            .finish()
    }
}

/// Plugin used when no wallet is attached; every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedWallet;

impl DetachedWallet {
    fn unavailable() -> WalletError {
        WalletError("no wallet plugin attached".to_string())
    }
}

impl WalletPlugin for DetachedWallet {
    async fn login(&self, _contract_id: &str, _network: &str) -> Result<String, WalletError> {
        Err(Self::unavailable())
    }

    async fn logout(&self, _network: &str) -> Result<String, WalletError> {
        Err(Self::unavailable())
    }

    async fn login_status(&self, _network: &str) -> Result<String, WalletError> {
        Ok("false".to_string())
    }

    async fn account_id(&self, _network: &str) -> Result<String, WalletError> {
        Err(Self::unavailable())
    }

    async fn account_balance(&self, _network: &str, _account_id: &str) -> Result<String, WalletError> {
        Err(Self::unavailable())
    }

    async fn call_contract(&self, _call: &ContractCall, _network: &str) -> Result<String, WalletError> {
        Err(Self::unavailable())
    }
}

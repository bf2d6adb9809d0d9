//! Capability interface of the external wallet plugin.
//!
//! The plugin is opaque: this crate only forwards calls and renders the
//! strings it returns.

use std::future::Future;

use thiserror::Error;

/// Failure reported by the wallet plugin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wallet plugin error: {0}")]
pub struct WalletError(pub String);

/// Arguments of a contract call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContractCall {
    pub contract: String,
    pub method: String,
    /// JSON-encoded arguments, passed through untouched.
    pub args: String,
    pub account_id: String,
    /// `true` for change (state-mutating) methods, `false` for view calls.
    pub change_method: bool,
}

/// Operations exposed by the wallet plugin, all keyed by network name.
pub trait WalletPlugin: Send + Sync {
    /// Start a login flow. Returns the plugin's acknowledgement text.
    fn login(
        &self,
        contract_id: &str,
        network: &str,
    ) -> impl Future<Output = Result<String, WalletError>> + Send;

    fn logout(&self, network: &str) -> impl Future<Output = Result<String, WalletError>> + Send;

    /// `"true"` when a session is active, anything else otherwise.
    fn login_status(&self, network: &str)
        -> impl Future<Output = Result<String, WalletError>> + Send;

    /// Account id of the active session, empty when there is none.
    fn account_id(&self, network: &str) -> impl Future<Output = Result<String, WalletError>> + Send;

    fn account_balance(
        &self,
        network: &str,
        account_id: &str,
    ) -> impl Future<Output = Result<String, WalletError>> + Send;

    /// Returns the contract's JSON reply.
    fn call_contract(
        &self,
        call: &ContractCall,
        network: &str,
    ) -> impl Future<Output = Result<String, WalletError>> + Send;
}

//! Login state shared by the wallet operations.

/// Whether a wallet session is active, and for which account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    is_logged_in: bool,
    account_id: String,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.is_logged_in = logged_in;
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn set_account_id(&mut self, account_id: impl Into<String>) {
        self.account_id = account_id.into();
    }
}

//! Network selection with persistence and change notifications.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::network::Network;
use crate::preferences::{PreferenceError, PreferenceStore, NETWORK_ID_KEY};

/// Emitted whenever the user picks a network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkChanged {
    pub network: String,
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("network index {index} out of range (have {len} options)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown network '{0}'")]
    Unknown(String),

    #[error("no network options configured")]
    NoOptions,

    #[error(transparent)]
    Preference(#[from] PreferenceError),
}

/// Holds the option list, the current selection and its subscribers.
pub struct NetworkSelector {
    options: Vec<String>,
    selected: usize,
    store: Arc<dyn PreferenceStore>,
    events: broadcast::Sender<NetworkChanged>,
}

impl NetworkSelector {
    /// Selector over `testnet`, `mainnet`, `betanet`, starting at index 0.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let options = Network::ALL.iter().map(|n| n.as_str().to_string()).collect();
        // Non-empty by construction.
        Self::build(options, store)
    }

    /// Selector over a custom option list.
    pub fn with_options(
        options: Vec<String>,
        store: Arc<dyn PreferenceStore>,
    ) -> Result<Self, NetworkError> {
        if options.is_empty() {
            return Err(NetworkError::NoOptions);
        }
        Ok(Self::build(options, store))
    }

    fn build(options: Vec<String>, store: Arc<dyn PreferenceStore>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            options,
            selected: 0,
            store,
            events,
        }
    }

    /// Sync the selection with the stored preference.
    ///
    /// With nothing stored, the current option is persisted. Otherwise the
    /// selection moves to the stored network silently; unknown names leave
    /// it where it is.
    pub fn initialize(&mut self) -> Result<(), NetworkError> {
        let stored = self.store.get(NETWORK_ID_KEY);
        if stored.is_empty() {
            let current = self.options[self.selected].clone();
            self.store.set(NETWORK_ID_KEY, &current)?;
            tracing::info!(network = %current, "No stored network, saved default");
            return Ok(());
        }

        match self.options.iter().position(|o| *o == stored) {
            Some(index) => {
                self.selected = index;
                tracing::debug!(network = %stored, index = self.selected, "Restored network selection");
            }
            None => {
                tracing::warn!(network = %stored, "Stored network not recognised, keeping selection");
            }
        }
        Ok(())
    }

    /// Pick the option at `index`, persist it and notify subscribers.
    pub fn select(&mut self, index: usize) -> Result<(), NetworkError> {
        let network = self
            .options
            .get(index)
            .cloned()
            .ok_or(NetworkError::IndexOutOfRange {
                index,
                len: self.options.len(),
            })?;

        self.store.set(NETWORK_ID_KEY, &network)?;
        self.selected = index;
        tracing::info!(network = %network, "Network changed");

        // No subscribers is fine.
        let _ = self.events.send(NetworkChanged { network });
        Ok(())
    }

    /// Pick an option by its text.
    pub fn select_by_name(&mut self, name: &str) -> Result<(), NetworkError> {
        match self.options.iter().position(|o| o == name) {
            Some(index) => self.select(index),
            None => Err(NetworkError::Unknown(name.to_string())),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NetworkChanged> {
        self.events.subscribe()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The persisted network name (empty if never set).
    pub fn current_network(&self) -> String {
        self.store.get(NETWORK_ID_KEY)
    }
}

impl std::fmt::Debug for NetworkSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkSelector")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .finish()
    }
}

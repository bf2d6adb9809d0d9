//! Persisted user preferences (currently only the selected network).

pub mod store;

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore};

/// Key under which the selected network name is stored.
pub const NETWORK_ID_KEY: &str = "networkId";

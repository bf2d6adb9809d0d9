//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the bridge.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Fixed VRF service path used when no endpoint is configured.
pub const DEFAULT_VRF_ENDPOINT: &str = "https://0xcord.com/api/vrfv2/requestRandomNumber";

/// Environment variable consulted when `vrf.auth_token` is empty.
pub const AUTH_TOKEN_ENV_VAR: &str = "VRF_AUTH_TOKEN";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BridgeConfig {
    /// VRF endpoint and request parameters.
    pub vrf: VrfConfig,

    /// Where the selected network is persisted.
    pub preferences: PreferencesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// VRF request configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VrfConfig {
    /// Full URL of the requestRandomNumber endpoint, without query string.
    pub endpoint: String,

    /// Network name passed as the `network` query parameter (e.g. "fuji").
    pub network: String,

    /// Number of random words requested.
    pub num_words: u32,

    /// Opaque credential sent verbatim in the `Authorization` header.
    pub auth_token: String,
}

impl VrfConfig {
    /// Resolve the auth token, falling back to `VRF_AUTH_TOKEN`.
    pub fn resolved_auth_token(&self) -> String {
        if !self.auth_token.is_empty() {
            return self.auth_token.clone();
        }
        std::env::var(AUTH_TOKEN_ENV_VAR).unwrap_or_default()
    }
}

impl Default for VrfConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_VRF_ENDPOINT.to_string(),
            network: "fuji".to_string(),
            num_words: 1,
            auth_token: String::new(),
        }
    }
}

// Never print the token.
impl std::fmt::Debug for VrfConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VrfConfig")
            .field("endpoint", &self.endpoint)
            .field("network", &self.network)
            .field("num_words", &self.num_words)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Preference store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Path of the JSON preferences file.
    pub path: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: "preferences.json".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

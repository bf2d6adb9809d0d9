//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (num_words > 0, non-empty endpoint and paths)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - The endpoint is not parsed here; a bad URL fails at request time

use thiserror::Error;

use crate::config::schema::BridgeConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("vrf.endpoint must not be empty")]
    EmptyEndpoint,

    #[error("vrf.network must not be empty")]
    EmptyNetwork,

    #[error("vrf.num_words must be at least 1")]
    ZeroWords,

    #[error("preferences.path must not be empty")]
    EmptyPreferencesPath,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Check a configuration, collecting every problem.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.vrf.endpoint.trim().is_empty() {
        errors.push(ValidationError::EmptyEndpoint);
    }
    if config.vrf.network.trim().is_empty() {
        errors.push(ValidationError::EmptyNetwork);
    }
    if config.vrf.num_words == 0 {
        errors.push(ValidationError::ZeroWords);
    }
    if config.preferences.path.trim().is_empty() {
        errors.push(ValidationError::EmptyPreferencesPath);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

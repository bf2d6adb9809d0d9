//! Request, response and result types for the VRF service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameters of a single random-number request.
#[derive(Clone, PartialEq, Eq)]
pub struct RandomNumberRequest {
    /// Network identifier embedded as the `network` query parameter.
    pub network: String,
    /// Count of random values requested (`numWords`).
    pub num_words: u32,
    /// Opaque credential sent as the `Authorization` header.
    pub auth_token: String,
}

impl RandomNumberRequest {
    pub fn new(network: impl Into<String>, num_words: u32, auth_token: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            num_words,
            auth_token: auth_token.into(),
        }
    }
}

impl From<&crate::config::VrfConfig> for RandomNumberRequest {
    fn from(config: &crate::config::VrfConfig) -> Self {
        Self::new(
            config.network.clone(),
            config.num_words,
            config.resolved_auth_token(),
        )
    }
}

impl std::fmt::Debug for RandomNumberRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomNumberRequest")
            .field("network", &self.network)
            .field("num_words", &self.num_words)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Wire envelope returned by the VRF endpoint.
///
/// Every field is optional so that a missing field becomes a malformed
/// response instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VrfResponse {
    pub data: Option<VrfResponseData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VrfResponseData {
    pub success: Option<bool>,
    pub request_id: Option<String>,
    pub transaction_hash: Option<String>,
    pub url: Option<String>,
    pub random_number: Option<Vec<String>>,
}

/// Why a request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network error or non-2xx status.
    Transport,
    /// 2xx response whose body lacks the expected fields.
    MalformedResponse,
    /// The caller aborted the request.
    Cancelled,
}

/// Outcome of one random-number request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RandomNumberResult {
    Success {
        request_id: String,
        transaction_hash: String,
        source_url: String,
        /// Never empty.
        values: Vec<String>,
    },
    Failure {
        kind: FailureKind,
        reason: String,
    },
}

impl RandomNumberResult {
    pub fn is_success(&self) -> bool {
        matches!(self, RandomNumberResult::Success { .. })
    }

    /// The first random value, if the request succeeded.
    pub fn first_value(&self) -> Option<&str> {
        match self {
            RandomNumberResult::Success { values, .. } => values.first().map(String::as_str),
            RandomNumberResult::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            RandomNumberResult::Success { .. } => None,
            RandomNumberResult::Failure { reason, .. } => Some(reason),
        }
    }
}

impl From<VrfError> for RandomNumberResult {
    fn from(err: VrfError) -> Self {
        RandomNumberResult::Failure {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur while requesting a random number.
#[derive(Debug, Error)]
pub enum VrfError {
    /// Connection failure or non-success HTTP status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("cancelled")]
    Cancelled,
}

impl VrfError {
    pub fn kind(&self) -> FailureKind {
        match self {
            VrfError::Transport(_) => FailureKind::Transport,
            VrfError::MalformedResponse(_) => FailureKind::MalformedResponse,
            VrfError::Cancelled => FailureKind::Cancelled,
        }
    }
}

/// Result type for VRF operations.
pub type VrfResult<T> = Result<T, VrfError>;

/// Classify a response body.
///
/// Yields `Success` only when `data.randomNumber` holds at least one value.
pub fn parse_response_body(body: &str) -> VrfResult<RandomNumberResult> {
    let response: VrfResponse = serde_json::from_str(body)
        .map_err(|e| VrfError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let data = response
        .data
        .ok_or_else(|| VrfError::MalformedResponse("missing data object".to_string()))?;

    let values = match data.random_number {
        Some(values) if !values.is_empty() => values,
        Some(_) => {
            return Err(VrfError::MalformedResponse(
                "empty randomNumber array".to_string(),
            ))
        }
        None => {
            return Err(VrfError::MalformedResponse(
                "missing randomNumber array".to_string(),
            ))
        }
    };

    Ok(RandomNumberResult::Success {
        request_id: data.request_id.unwrap_or_default(),
        transaction_hash: data.transaction_hash.unwrap_or_default(),
        source_url: data.url.unwrap_or_default(),
        values,
    })
}

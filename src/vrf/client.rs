//! HTTP client for the VRF random-number endpoint.
//!
//! # Responsibilities
//! - Build the POST request (query parameters + Authorization header)
//! - Classify the outcome as success, transport failure or malformed body
//! - Hand the result to a caller-supplied sink exactly once
//!
//! No retries and no timeout beyond the transport's own defaults.

use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tokio::sync::{broadcast, oneshot};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::schema::DEFAULT_VRF_ENDPOINT;
use crate::vrf::state::RequestState;
use crate::vrf::types::{
    parse_response_body, RandomNumberRequest, RandomNumberResult, VrfError, VrfResult,
};

/// Receives the outcome of a request.
pub trait ResultSink {
    fn deliver(self, result: RandomNumberResult);
}

impl<F> ResultSink for F
where
    F: FnOnce(RandomNumberResult),
{
    fn deliver(self, result: RandomNumberResult) {
        self(result)
    }
}

impl ResultSink for oneshot::Sender<RandomNumberResult> {
    fn deliver(self, result: RandomNumberResult) {
        if self.send(result).is_err() {
            tracing::debug!("Result receiver dropped before delivery");
        }
    }
}

/// Client for `requestRandomNumber`.
#[derive(Clone)]
pub struct RandomNumberClient {
    http: Client,
    endpoint: String,
}

impl RandomNumberClient {
    /// Create a client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), endpoint)
    }

    /// Create a client reusing an existing `reqwest::Client`.
    pub fn with_http_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL with `network` and `numWords` query parameters.
    pub fn request_url(&self, request: &RandomNumberRequest) -> VrfResult<url::Url> {
        if self.endpoint.trim().is_empty() {
            return Err(VrfError::Transport("endpoint is empty".to_string()));
        }
        let mut url = url::Url::parse(&self.endpoint).map_err(|e| {
            VrfError::Transport(format!("invalid endpoint '{}': {}", self.endpoint, e))
        })?;
        url.query_pairs_mut()
            .append_pair("network", &request.network)
            .append_pair("numWords", &request.num_words.to_string());
        Ok(url)
    }

    /// Issue one request and classify the response.
    ///
    /// Always completes with a result; failures never escape as errors.
    pub async fn request_random_number(&self, request: &RandomNumberRequest) -> RandomNumberResult {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "vrf_request",
            %request_id,
            network = %request.network,
            num_words = request.num_words,
        );

        async move {
            let mut state = RequestState::Idle;
            advance(&mut state, RequestState::Requesting);

            let result = match self.send(request).await {
                Ok(result) => result,
                Err(e) => e.into(),
            };

            match &result {
                RandomNumberResult::Success {
                    request_id,
                    transaction_hash,
                    source_url,
                    values,
                } => {
                    advance(&mut state, RequestState::Succeeded);
                    tracing::info!(
                        vrf_request_id = %request_id,
                        transaction_hash = %transaction_hash,
                        url = %source_url,
                        random_number = %values[0],
                        "Random number received"
                    );
                }
                RandomNumberResult::Failure { kind, reason } => {
                    advance(&mut state, RequestState::Failed);
                    tracing::warn!(kind = ?kind, reason = %reason, "Random number request failed");
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    /// Run the request and pass its result to `sink`.
    pub async fn deliver<S: ResultSink>(&self, request: &RandomNumberRequest, sink: S) {
        let result = self.request_random_number(request).await;
        sink.deliver(result);
    }

    /// Run the request unless `cancel` fires first.
    ///
    /// On cancellation the transport future is dropped and the result is
    /// `Failure { kind: Cancelled, .. }`.
    pub async fn request_until_cancelled(
        &self,
        request: &RandomNumberRequest,
        cancel: broadcast::Receiver<()>,
    ) -> RandomNumberResult {
        tokio::select! {
            result = self.request_random_number(request) => result,
            _ = cancelled(cancel) => {
                tracing::info!(network = %request.network, "Random number request cancelled");
                VrfError::Cancelled.into()
            }
        }
    }

    async fn send(&self, request: &RandomNumberRequest) -> VrfResult<RandomNumberResult> {
        let url = self.request_url(request)?;
        tracing::debug!(url = %url, "Sending VRF request");

        let resp = self
            .http
            .post(url)
            .header(AUTHORIZATION, request.auth_token.as_str())
            .body("")
            .send()
            .await
            .map_err(|e| VrfError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| VrfError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = %status, body = %text, "VRF endpoint returned error status");
            return Err(VrfError::Transport(format!("HTTP {}", status)));
        }

        parse_response_body(&text)
    }
}

impl Default for RandomNumberClient {
    fn default() -> Self {
        Self::new(DEFAULT_VRF_ENDPOINT)
    }
}

impl From<&crate::config::VrfConfig> for RandomNumberClient {
    fn from(config: &crate::config::VrfConfig) -> Self {
        Self::new(config.endpoint.clone())
    }
}

impl std::fmt::Debug for RandomNumberClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomNumberClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn advance(state: &mut RequestState, next: RequestState) {
    match state.transition(next) {
        Ok(s) => {
            tracing::trace!(from = ?state, to = ?s, "Request state change");
            *state = s;
        }
        Err(e) => tracing::error!(error = %e, "Request state machine violated"),
    }
}

/// Resolves when a cancel signal arrives. A closed channel never cancels.
async fn cancelled(mut rx: broadcast::Receiver<()>) {
    if let Err(broadcast::error::RecvError::Closed) = rx.recv().await {
        std::future::pending::<()>().await;
    }
}

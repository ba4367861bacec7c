//! HTTP transport and retry policy for the Pave endpoint
//!
//! The wire call sits behind the [`Transport`] trait so the retry and
//! classification logic in [`send`] can be exercised with a scripted stub.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, trace, warn};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::query::Envelope;
use crate::error::ApiError;

/// Default Pave endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.jobtread.com/pave";

/// Per-attempt wall clock limit
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Fixed pause between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Where the client is running; only changes the network failure hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development, usually talking to a relay
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Remediation hint attached to exhausted network failures.
    pub fn network_hint(&self) -> &'static str {
        match self {
            Environment::Development => {
                "The API server may not be allowing requests from this origin. Point \
                 --endpoint at the relay, disable cross-origin checks locally, or contact \
                 JobTread to whitelist your origin."
            }
            Environment::Production => {
                "Unable to connect to the API. Please check your network connection and try again."
            }
        }
    }
}

/// Retry budget and timing for one top-level call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one (total attempts = max_retries + 1)
    pub max_retries: u32,
    /// Pause between attempts; no backoff, no jitter
    pub delay: Duration,
    /// Wall clock limit per attempt
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            delay: DEFAULT_RETRY_DELAY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Failure before any HTTP status was received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Timeout,
    Network(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Network("Failed to connect to API".to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// A single POST of a JSON body to the Pave endpoint
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        body: &Value,
        grant_key: &str,
    ) -> std::result::Result<RawResponse, TransportError>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    http: HttpClient,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the given endpoint (vendor URL or relay URL).
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("dashcopy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network {
                message: e.to_string(),
                hint: "Failed to initialize the HTTP client.".to_string(),
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        body: &Value,
        grant_key: &str,
    ) -> std::result::Result<RawResponse, TransportError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(grant_key)
            .json(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        debug!("Pave responded with status {}", status);

        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

/// Send an envelope, retrying server and network failures within `policy`.
///
/// Returns the parsed JSON body of a 2xx response that carries no `errors`.
pub async fn send<T: Transport + ?Sized>(
    transport: &T,
    envelope: &Envelope,
    grant_key: &str,
    policy: &RetryPolicy,
    environment: Environment,
) -> Result<Value, ApiError> {
    let body = envelope.body();
    let operation = envelope.operation().name();
    trace!("Pave query for {}: {}", operation, envelope.redacted());

    let mut retries_left = policy.max_retries;
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        debug!("{}: attempt {}", operation, attempt);

        let outcome = match tokio::time::timeout(policy.timeout, transport.post(&body, grant_key))
            .await
        {
            Err(_) | Ok(Err(TransportError::Timeout)) => Err(ApiError::Timeout),
            Ok(Err(TransportError::Network(message))) => Err(ApiError::Network {
                message,
                hint: environment.network_hint().to_string(),
            }),
            Ok(Ok(response)) => classify(response),
        };

        match outcome {
            Err(err) if err.is_retryable() && retries_left > 0 => {
                warn!(
                    "{}: {} (retrying, {} retries left)",
                    operation, err, retries_left
                );
                retries_left -= 1;
                tokio::time::sleep(policy.delay).await;
            }
            Err(err) => {
                debug!("{}: failed after {} attempt(s): {}", operation, attempt, err);
                return Err(err);
            }
            Ok(value) => return Ok(value),
        }
    }
}

/// Map a completed HTTP exchange to a body or a classified error.
fn classify(response: RawResponse) -> Result<Value, ApiError> {
    let RawResponse { status, body } = response;

    match status {
        401 | 403 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        s if s >= 500 => Err(ApiError::ServerError(failure_message(s, &body))),
        s if (200..300).contains(&s) => {
            let value: Value = serde_json::from_str(&body).map_err(|e| {
                ApiError::MalformedResponse(format!("response body is not valid JSON: {}", e))
            })?;

            if let Some(errors) = value.get("errors").filter(|e| !e.is_null()) {
                return Err(ApiError::Api(join_errors(errors)));
            }

            Ok(value)
        }
        s => Err(ApiError::Api(failure_message(s, &body))),
    }
}

fn failure_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("API request failed ({})", status)
    } else {
        format!("API request failed ({}): {}", status, body)
    }
}

/// Join vendor errors by message, falling back to each error's JSON form.
fn join_errors(errors: &Value) -> String {
    match errors.as_array() {
        Some(list) => list
            .iter()
            .map(|e| match e.get("message").and_then(Value::as_str) {
                Some(message) if !message.is_empty() => message.to_string(),
                _ => e.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        None => errors.to_string(),
    }
}

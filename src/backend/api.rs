//! HTTP client for the prediction service

use reqwest::{Client, StatusCode};

use super::types::{CheckError, CheckRequest, CheckResult, HealthResponse};
use crate::config::CheckerConfig;

/// Header the service checks when it is started with an API key
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Shown when the user submits nothing
pub const VALIDATION_MESSAGE: &str = "Please paste a URL to check first.";
/// Non-2xx response whose body is not a JSON error
pub const CONNECTION_ERROR: &str = "Connection Error";
/// JSON error body without a usable `detail`
pub const SERVER_ERROR: &str = "Server Error";
/// Transport error that carried no message of its own
pub const TRANSPORT_FALLBACK: &str = "Could not reach the prediction service";

/// Why a check did not produce a verdict
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckFailure {
    /// Nothing to check; no request was sent
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    /// The service answered, but not with a verdict
    #[error("{0}")]
    Service(String),
    /// The request never completed
    #[error("{0}")]
    Transport(String),
}

impl CheckFailure {
    fn transport(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            CheckFailure::Transport(TRANSPORT_FALLBACK.to_string())
        } else {
            CheckFailure::Transport(message)
        }
    }

    /// Map a non-2xx body to a user-facing message.
    fn from_error_body(body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<CheckError>(body) {
            Ok(err) => err.message().unwrap_or_else(|| SERVER_ERROR.to_string()),
            Err(_) => CONNECTION_ERROR.to_string(),
        };
        CheckFailure::Service(message)
    }
}

/// Client for communicating with the prediction service
#[derive(Debug, Clone)]
pub struct PredictionClient {
    client: Client,
    predict_url: String,
    health_url: String,
    api_key: Option<String>,
}

impl PredictionClient {
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            client: Client::new(),
            predict_url: config.predict_url(),
            health_url: config.health_url(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }

    /// Ask the service to classify one URL
    pub async fn predict(&self, request: &CheckRequest) -> Result<CheckResult, CheckFailure> {
        tracing::info!("Requesting verdict for {}", request.url);

        let mut builder = self.client.post(&self.predict_url).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let response = builder.send().await.map_err(CheckFailure::transport)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let failure = CheckFailure::from_error_body(&body);
            tracing::warn!("Prediction service returned {}: {}", status, failure);
            return Err(failure);
        }

        let body = response.bytes().await.map_err(CheckFailure::transport)?;
        let result = decode_verdict(status, &body)?;
        tracing::debug!(
            "Verdict for {}: {} ({})",
            result.url,
            result.label,
            result.probability
        );
        Ok(result)
    }

    /// Check if the service is up
    pub async fn health_check(&self) -> Result<HealthResponse, CheckFailure> {
        let response = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .map_err(CheckFailure::transport)?;

        if !response.status().is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(CheckFailure::from_error_body(&body));
        }

        response
            .json::<HealthResponse>()
            .await
            .map_err(|e| CheckFailure::Service(format!("Invalid health response: {}", e)))
    }
}

fn decode_verdict(status: StatusCode, body: &[u8]) -> Result<CheckResult, CheckFailure> {
    let result: CheckResult = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Undecodable {} body from prediction service: {}", status, e);
        CheckFailure::Service(format!("Invalid response from prediction service: {}", e))
    })?;
    result.validate().map_err(|reason| {
        tracing::warn!("Rejected verdict payload: {}", reason);
        CheckFailure::Service(format!("Invalid response from prediction service: {}", reason))
    })?;
    Ok(result)
}

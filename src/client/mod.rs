//! Prediction API Client
//!
//! HTTP client for the remote view-count prediction endpoint.

use std::time::Duration;

use crate::config::Config;
use crate::error::PredictionError;
use crate::format::format_view_count;
use crate::models::{error_message, DisplayResult, InputPolicy, PredictionForm, PredictionRequest, PredictionResponse};


/// Shown for every failure that carries no server explanation
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please check the logs for details.";

/// Prediction endpoint configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint_url: String,
    pub input_policy: InputPolicy,
    pub timeout_seconds: Option<u64>,
}

impl From<&Config> for ClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            endpoint_url: config.endpoint_url.clone(),
            input_policy: config.input_policy,
            timeout_seconds: config.request_timeout_secs,
        }
    }
}

/// Prediction API client
#[derive(Debug, Clone)]
pub struct PredictionClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl PredictionClient {
    /// Create new prediction client
    pub fn new(config: ClientConfig) -> Result<Self, PredictionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(PredictionError::ClientBuild)?;

        Ok(Self { config, http_client })
    }

    /// Configured endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint_url
    }

    pub fn input_policy(&self) -> InputPolicy {
        self.config.input_policy
    }

    /// POST one request and decode the prediction.
    ///
    /// Exactly one network call; never retried.
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, PredictionError> {
        let response = self.http_client
            .post(&self.config.endpoint_url)
            .json(request)
            .send()
            .await
            .map_err(PredictionError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(PredictionError::Transport)?;

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| format!("HTTP error: status {}", status.as_u16()));
            return Err(PredictionError::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| PredictionError::MalformedResponse(e.to_string()))
    }

    /// Turn raw form values into a display-ready result.
    ///
    /// All failures are caught and logged here; none reach the caller.
    pub async fn submit_prediction(&self, form: &PredictionForm) -> DisplayResult {
        let policy = self.config.input_policy;
        let request = PredictionRequest::from_form(form, policy);

        if policy.validates() {
            if let Err(fields) = request.check() {
                tracing::info!("Submission rejected: {} invalid field(s)", fields.len());
                return DisplayResult::Rejected { fields };
            }
        }

        tracing::info!("Sending prediction request to {}", self.config.endpoint_url);
        tracing::debug!("Request body: {:?}", request);

        match self.predict(&request).await {
            Ok(result) => {
                tracing::info!("Received prediction: {}", result.predicted_view_count);
                DisplayResult::Success {
                    text: format_view_count(result.predicted_view_count),
                }
            }
            Err(PredictionError::Http { status, message }) => {
                tracing::warn!("Prediction endpoint returned {}: {}", status, message);
                DisplayResult::Error { message }
            }
            Err(e) => {
                tracing::error!("Error making prediction: {}", e);
                DisplayResult::Error {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}

//! Configuration module

use std::env;

use crate::models::InputPolicy;

/// Endpoint used when `PREDICT_ENDPOINT_URL` is not set
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://7pxjw3lx1m.execute-api.us-east-1.amazonaws.com/predict";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Prediction endpoint URL
    pub endpoint_url: String,

    /// Server port
    pub port: u16,

    /// How raw numeric fields are parsed and checked
    pub input_policy: InputPolicy,

    /// Request timeout in seconds (platform default when unset)
    pub request_timeout_secs: Option<u64>,

    /// Environment (development, production)
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            port: 8080,
            input_policy: InputPolicy::default(),
            request_timeout_secs: None,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            endpoint_url: lookup("PREDICT_ENDPOINT_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.endpoint_url),

            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            input_policy: lookup("PREDICT_INPUT_POLICY")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.input_policy),

            request_timeout_secs: lookup("PREDICT_TIMEOUT_SECS")
                .and_then(|t| t.parse().ok())
                .filter(|secs| *secs > 0),

            environment: lookup("ENVIRONMENT")
                .unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

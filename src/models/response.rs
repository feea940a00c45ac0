//! Prediction response and display models

use serde::{Deserialize, Serialize};

use super::FieldError;

/// Successful body returned by the prediction endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_view_count: f64,
}

/// Pull the server-supplied `error` string out of a failure body, if any
pub fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// What the result region shows once a submission resolves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DisplayResult {
    Success { text: String },
    Error { message: String },
    Rejected { fields: Vec<FieldError> },
}

impl DisplayResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Plain text for the result region
    pub fn text(&self) -> String {
        match self {
            Self::Success { text } => text.clone(),
            Self::Error { message } => message.clone(),
            Self::Rejected { fields } => fields
                .iter()
                .map(|f| format!("{}: {}", f.field, f.message))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::models::FieldError;

/// Failures of a single call to the prediction endpoint
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    /// The request never produced a response (unreachable host, reset, timeout)
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body is not a usable prediction
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl PredictionError {
    /// Status code for HTTP failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Submission rejected before reaching the endpoint
    InvalidInput(Vec<FieldError>),

    // Resource errors
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidInput(fields) => {
                let status = StatusCode::UNPROCESSABLE_ENTITY;
                tracing::debug!("Rejected submission: {} invalid field(s)", fields.len());

                let body = Json(json!({
                    "error": "Invalid input",
                    "status": status.as_u16(),
                    "fields": fields,
                }));

                (status, body).into_response()
            }
            AppError::NotFound(msg) => {
                let status = StatusCode::NOT_FOUND;

                let body = Json(json!({
                    "error": msg,
                    "status": status.as_u16()
                }));

                (status, body).into_response()
            }
        }
    }
}

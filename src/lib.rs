//! View Predictor
//!
//! Collects video metadata from a web form, posts it to a remote
//! view-count prediction endpoint and renders the predicted count.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     VIEW PREDICTOR                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────────┐   ┌─────────────┐  │
//! │  │  Form     │──▶│ PredictionClient │──▶│  format     │  │
//! │  │  (Axum)   │   │  (reqwest)       │   │  (display)  │  │
//! │  └───────────┘   └────────┬─────────┘   └─────────────┘  │
//! │                           ▼                              │
//! │                 ┌───────────────────┐                    │
//! │                 │ Prediction API    │ (external)         │
//! │                 └───────────────────┘                    │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod format;
pub mod handlers;
pub mod models;

#[cfg(test)]
mod test_support;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
};

pub use client::PredictionClient;
pub use config::Config;
pub use error::{AppError, AppResult, PredictionError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub client: PredictionClient,
    pub config: Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::index))
        .route("/health", get(handlers::health::check))
        .route("/api/predict", post(handlers::predict::submit))
        .fallback(handlers::page::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

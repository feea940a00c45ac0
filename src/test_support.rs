//! Shared fixtures: mock prediction endpoints served by a real axum router

use axum::Router;
use tokio::net::TcpListener;

use crate::client::{ClientConfig, PredictionClient};
use crate::models::{InputPolicy, PredictionForm};

/// Serve `router` on an ephemeral local port, returning its base URL
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A URL nothing is listening on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}/predict", addr)
}

pub fn client_for(endpoint_url: &str, input_policy: InputPolicy) -> PredictionClient {
    PredictionClient::new(ClientConfig {
        endpoint_url: endpoint_url.to_string(),
        input_policy,
        timeout_seconds: Some(10),
    })
    .unwrap()
}

pub fn sample_form() -> PredictionForm {
    PredictionForm {
        like_count: "1500".to_string(),
        comment_count: "230".to_string(),
        duration_seconds: "615".to_string(),
        tag_count: "12".to_string(),
        category_id: "22".to_string(),
        publish_hour: "17".to_string(),
        publish_day_of_week: "4".to_string(),
        channel_title: "Tech Explained".to_string(),
    }
}

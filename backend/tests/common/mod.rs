//! Common test utilities for integration tests
//!
//! The application has no database; a test app is just the router built
//! over a chosen configuration. Menu tests point the Gemini base URL at a
//! wiremock server.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use nutriplan_backend::{config::AppConfig, routes, state::AppState};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// App with default configuration (no AI credentials)
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// App whose Gemini client points at a mock server
    pub fn with_gemini(base_url: &str) -> Self {
        let mut config = AppConfig::default();
        config.gemini.api_key = "test-key".to_string();
        config.gemini.base_url = base_url.to_string();
        config.gemini.timeout_secs = 5;
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(config);
        let app = routes::create_router(state);
        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: &serde_json::Value) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// A complete, valid stats payload used across tests
pub fn sample_stats() -> serde_json::Value {
    serde_json::json!({
        "name": "Minh",
        "gender": "male",
        "age": 30,
        "height": 175,
        "weight": 70,
        "activity": "sedentary",
        "goal": "lose",
        "dietPreference": "balanced"
    })
}

//! Common test utilities for integration tests
//!
//! Builds the full router over an in-memory document store, so these tests
//! need no database.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitflow_backend::{
    auth::JwtService,
    coach::{CoachError, DisabledClient, GenerativeClient},
    config::{AppConfig, StorageBackend},
    repositories::InMemoryDocumentStore,
    routes,
    state::AppState,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// Generative client returning a fixed reply and recording prompts
#[derive(Default)]
pub struct CannedClient {
    pub reply: String,
    pub prompts: Mutex<Vec<String>>,
}

impl CannedClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl GenerativeClient for CannedClient {
    async fn generate(&self, prompt: &str) -> Result<String, CoachError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub store: Arc<InMemoryDocumentStore>,
    jwt: JwtService,
}

impl TestApp {
    /// Application whose coach is disabled
    pub fn new() -> Self {
        Self::with_coach(Arc::new(DisabledClient))
    }

    pub fn with_coach(coach: Arc<dyn GenerativeClient>) -> Self {
        let config = test_config();
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry_secs);
        let store = Arc::new(InMemoryDocumentStore::new());
        let state = AppState::new(store.clone(), coach, config);

        Self {
            app: routes::create_router(state),
            store,
            jwt,
        }
    }

    /// Access token for a user id, as the identity service would issue it
    pub fn token_for(&self, user_id: &str) -> String {
        self.jwt.generate_access_token(user_id).unwrap()
    }

    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None, None).await
    }

    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), None).await
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> (StatusCode, String) {
        self.send("GET", path, None, Some(token)).await
    }

    pub async fn post_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        self.send("POST", path, Some(body), Some(token)).await
    }

    pub async fn put_auth(&self, path: &str, body: &str, token: &str) -> (StatusCode, String) {
        self.send("PUT", path, Some(body), Some(token)).await
    }

    /// Complete onboarding for a user and return their token
    pub async fn onboard(&self, user_id: &str, profile: &Value) -> String {
        let token = self.token_for(user_id);
        let (status, body) = self
            .post_auth("/api/v1/profile", &profile.to_string(), &token)
            .await;
        assert_eq!(status, StatusCode::CREATED, "onboarding failed: {body}");
        token
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(path);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

/// Parse a response body as JSON
pub fn json_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON ({e}): {body}"))
}

/// 30-year-old male, 180 cm, 80 kg, moderately active
pub fn sample_profile(goal: &str) -> Value {
    json!({
        "name": "Alex",
        "gender": "Male",
        "age": 30,
        "height": 180.0,
        "weight": 80.0,
        "goal": goal,
        "activityLevel": 3
    })
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config.jwt.secret = TEST_JWT_SECRET.to_string();
    config
}

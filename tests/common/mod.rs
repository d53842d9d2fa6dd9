// tests/common/mod.rs
// Shared helpers: scripted provider, test app state, request builders

#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;
use tower::ServiceExt;

use sardinai::api;
use sardinai::auth::{AuthService, DEMO_EMAIL, DEMO_PASSWORD, InMemoryUserRepository};
use sardinai::config::auth::AuthConfig;
use sardinai::llm::{LlmProvider, Message, Response as LlmResponse, TokenUsage};
use sardinai::state::AppState;

/// Replays queued replies in order and records every request
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    pub calls: Mutex<Vec<(Vec<Message>, String)>>,
}

impl ScriptedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(self: Arc<Self>, text: &str) -> Arc<Self> {
        self.replies.lock().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self: Arc<Self>, error: &str) -> Arc<Self> {
        self.replies.lock().push_back(Err(error.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last_call(&self) -> Option<(Vec<Message>, String)> {
        self.calls.lock().last().cloned()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn chat(&self, messages: Vec<Message>, system: String) -> Result<LlmResponse> {
        self.calls.lock().push((messages, system));
        let next = self.replies.lock().pop_front();
        match next {
            Some(Ok(content)) => Ok(LlmResponse {
                content,
                model: "scripted".to_string(),
                tokens: TokenUsage::default(),
                latency_ms: 0,
            }),
            Some(Err(error)) => Err(anyhow!(error)),
            None => Err(anyhow!("no scripted reply left")),
        }
    }
}

/// Holds every request until the test releases a permit
pub struct GatedProvider {
    permits: Semaphore,
    started: AtomicUsize,
}

impl GatedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            permits: Semaphore::new(0),
            started: AtomicUsize::new(0),
        })
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn release(&self, count: usize) {
        self.permits.add_permits(count);
    }

    pub async fn wait_for_started(&self, count: usize) {
        while self.started() < count {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl LlmProvider for GatedProvider {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn chat(&self, _messages: Vec<Message>, _system: String) -> Result<LlmResponse> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.permits.acquire().await?.forget();
        Ok(LlmResponse {
            content: "Day 1: Alghero old town".to_string(),
            model: "gated".to_string(),
            tokens: TokenUsage::default(),
            latency_ms: 0,
        })
    }
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "integration-test-secret".to_string(),
        token_ttl_hours: 1,
        bcrypt_cost: 4,
        seed_demo_user: true,
    }
}

pub async fn test_app<P: LlmProvider + 'static>(provider: Arc<P>) -> Router {
    let auth = Arc::new(AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        &test_auth_config(),
    ));
    auth.seed_demo_user().await.unwrap();

    let state = Arc::new(AppState::new(provider, auth));
    api::router(state)
}

pub fn json_request(method: &str, uri: &str, body: &Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub async fn register_token(app: &Router, name: &str, email: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/register",
            &serde_json::json!({"name": name, "email": email, "password": "supersecret"}),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["token"].as_str().unwrap().to_string()
}

pub async fn demo_token(app: &Router) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/login",
            &serde_json::json!({"email": DEMO_EMAIL, "password": DEMO_PASSWORD}),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["token"].as_str().unwrap().to_string()
}

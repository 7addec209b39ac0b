//! Shared helpers for HTTP-level tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use mesa_server::auth::JwtConfig;
use mesa_server::core::{Config, ServerState};
use mesa_server::notify::MailConfig;
use mesa_server::services::build_app;
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_config() -> Config {
    let mut config = Config::with_overrides("./target/test-data", 0);
    config.jwt = JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        expiration_minutes: 60,
        issuer: "mesa-server".to_string(),
        audience: "mesa-admin".to_string(),
    };
    config.mail = MailConfig::disabled();
    config.cors_origins = vec!["*".to_string()];
    config
}

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
}

impl TestApp {
    pub async fn new() -> Self {
        let state = ServerState::in_memory(test_config()).await.unwrap();
        let app = build_app(state.clone());
        Self { app, state }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Register an admin and return its bearer token
    pub async fn admin_token(&self) -> String {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                json!({ "name": "Chef", "email": "chef@example.com", "password": "secret123" }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["token"].as_str().unwrap().to_string()
    }
}

pub fn reservation(guests: u32, date: &str, time: &str) -> Value {
    json!({
        "name": "Ana Silva",
        "phone": "912345678",
        "guests": guests,
        "date": date,
        "time": time,
    })
}

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use peeps_backend::{
    config::{Config, SmtpConfig},
    models::contact::ReceivedContact,
    services::{ContactNotifier, NotifyError},
    state::AppState,
};
use std::sync::{Arc, Mutex};

pub fn test_config() -> Config {
    Config {
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        cors_allow_origins: vec!["http://localhost:8000".into()],
        contact_inbox: None,
        smtp: SmtpConfig {
            host: "localhost".into(),
            port: 2525,
            username: String::new(),
            password: String::new(),
            from_address: "noreply@campuscircle.local".into(),
            skip_send: true,
        },
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub received: Arc<Mutex<Vec<ReceivedContact>>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.received.lock().expect("lock").len()
    }

    pub fn last(&self) -> Option<ReceivedContact> {
        self.received.lock().expect("lock").last().cloned()
    }
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify(&self, contact: &ReceivedContact) -> Result<(), NotifyError> {
        self.received.lock().expect("lock").push(contact.clone());
        Ok(())
    }
}

pub struct FailingNotifier;

#[async_trait]
impl ContactNotifier for FailingNotifier {
    async fn notify(&self, _contact: &ReceivedContact) -> Result<(), NotifyError> {
        let err = "not-an-address"
            .parse::<lettre::Address>()
            .expect_err("invalid address");
        Err(NotifyError::Address(err))
    }
}

pub fn app_with(notifier: Arc<dyn ContactNotifier>) -> Router {
    peeps_backend::app(AppState::new(test_config(), notifier))
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json")
}

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use teleapi::{PreparedRequest, Result, Transport};
use tracing_subscriber::EnvFilter;
use wiremock::ResponseTemplate;

pub const TOKEN: &str = "TEST";

/// Routes dispatch logs to the test output; `RUST_LOG=teleapi=debug` shows them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Envelope for a successful call.
pub fn ok_body(result: &str) -> String {
    format!(r#"{{"ok":true,"result":{result}}}"#)
}

/// Envelope for a rejected call.
pub fn error_body(code: i64, description: &str, parameters: &str) -> String {
    format!(
        r#"{{"ok":false,"error_code":{code},"description":"{description}","parameters":{parameters}}}"#
    )
}

pub fn ok_response(result: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/json")
        .set_body_string(ok_body(result))
}

pub fn message_json(chat_id: i64) -> String {
    format!(r#"{{"message_id":1,"date":1700000000,"chat":{{"id":{chat_id},"type":"private"}}}}"#)
}

/// Keeps every submitted request and answers with a canned body.
#[derive(Clone)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<PreparedRequest>>>,
    reply: Bytes,
}

impl RecordingTransport {
    pub fn replying(body: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Bytes::from(body.into()),
        }
    }

    pub fn calls(&self) -> Vec<PreparedRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    async fn submit(&self, request: PreparedRequest) -> Result<Bytes> {
        self.calls.lock().unwrap().push(request);
        Ok(self.reply.clone())
    }
}

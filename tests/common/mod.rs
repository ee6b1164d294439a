//! Shared utilities for integration tests.
//!
//! `Receiver` is an in-process stand-in for the downstream service: it
//! records every request it gets and answers with a programmable status and
//! body per path.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use caller_service::{CallerConfig, HttpServer, Shutdown};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const API_PREFIX: &str = "/receiver-service/api";

/// One multipart part as seen by the receiver.
#[derive(Debug, Clone)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// One request as seen by the receiver.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Raw (still percent-encoded) path.
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    pub parts: Vec<RecordedPart>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone, Debug)]
struct Canned {
    status: u16,
    body: String,
    delay: Duration,
}

impl Default for Canned {
    fn default() -> Self {
        Self {
            status: 200,
            body: "ok".to_string(),
            delay: Duration::ZERO,
        }
    }
}

#[derive(Clone, Default)]
struct ReceiverState {
    requests: Arc<Mutex<Vec<Recorded>>>,
    responses: Arc<Mutex<HashMap<String, Canned>>>,
    fallback: Arc<Mutex<Canned>>,
}

/// Programmable mock receiver.
pub struct Receiver {
    pub base_url: String,
    state: ReceiverState,
}

impl Receiver {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = ReceiverState::default();

        let app = Router::new().fallback(record).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}{API_PREFIX}"),
            state,
        }
    }

    /// Answer requests to `endpoint` (relative to the API prefix) with
    /// `status` and `body`. Unprogrammed paths use the fallback response.
    pub fn respond(&self, endpoint: &str, status: u16, body: &str) {
        self.respond_after(endpoint, Duration::ZERO, status, body);
    }

    /// Like [`Receiver::respond`], but wait `delay` before answering.
    pub fn respond_after(&self, endpoint: &str, delay: Duration, status: u16, body: &str) {
        self.state.responses.lock().unwrap().insert(
            format!("{API_PREFIX}/{endpoint}"),
            Canned {
                status,
                body: body.to_string(),
                delay,
            },
        );
    }

    /// Response for every unprogrammed path. Starts as `200 ok`.
    pub fn respond_by_default(&self, status: u16, body: &str) {
        *self.state.fallback.lock().unwrap() = Canned {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        };
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The only request received so far.
    pub fn single(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one downstream request");
        requests.into_iter().next().unwrap()
    }
}

async fn record(State(state): State<ReceiverState>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_string);
    let headers = request.headers().clone();
    let is_multipart = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/form-data"));

    let (body, parts) = if is_multipart {
        let mut multipart = Multipart::from_request(request, &()).await.unwrap();
        let mut parts = Vec::new();
        while let Some(field) = multipart.next_field().await.unwrap() {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.unwrap().to_vec();
            parts.push(RecordedPart {
                name,
                file_name,
                content_type,
                bytes,
            });
        }
        (Vec::new(), parts)
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .unwrap();
        (bytes.to_vec(), Vec::new())
    };

    state.requests.lock().unwrap().push(Recorded {
        method,
        path: path.clone(),
        query,
        headers,
        body,
        parts,
    });

    let canned = state
        .responses
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or_else(|| state.fallback.lock().unwrap().clone());
    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }
    (StatusCode::from_u16(canned.status).unwrap(), canned.body).into_response()
}

/// Write the two upload files into `dir`.
pub fn write_uploads(dir: &Path) -> (PathBuf, PathBuf) {
    let primary = dir.join("test.xlsx");
    let secondary = dir.join("test2.xlsx");
    std::fs::write(&primary, b"primary-sheet").unwrap();
    std::fs::write(&secondary, b"secondary-sheet").unwrap();
    (primary, secondary)
}

/// Config pointing every scenario at `base_url`.
pub fn caller_config(base_url: &str) -> CallerConfig {
    let mut config = CallerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.receiver.base_url = Some(base_url.to_string());
    config
}

/// A caller service running on an ephemeral port.
pub struct TestCaller {
    pub url: String,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<()>,
}

pub async fn start_caller(config: CallerConfig) -> TestCaller {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let server = HttpServer::new(config).unwrap();

    let shutdown = Shutdown::new();
    let signal = shutdown.clone();
    let handle = tokio::spawn(async move {
        server.run(listener, signal).await.unwrap();
    });

    TestCaller {
        url,
        shutdown,
        handle,
    }
}

//! Mock Dooray service for tests.
//!
//! Binds an axum router to an ephemeral port, records every request it
//! receives and answers with whatever the test's responder returns.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::dooray::{Config, DoorayClient};

pub const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

impl RecordedRequest {
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_query_param(&self, name: &str) -> bool {
        self.query_param(name).is_some()
    }
}

type Responder = Arc<dyn Fn(&RecordedRequest) -> (StatusCode, Value) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Responder,
}

pub struct MockDooray {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockDooray {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: Arc::clone(&requests),
            responder: Arc::new(responder),
        };
        let app = Router::new().fallback(record).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock Dooray listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock Dooray server failed");
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// A service that answers every request with a successful envelope around `result`.
    pub async fn ok(result: Value) -> Self {
        Self::start(move |_| success(result.clone())).await
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> DoorayClient {
        client_for(&self.url())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().expect("one request")
    }
}

impl Drop for MockDooray {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let request = RecordedRequest {
        method,
        path: uri.path().to_string(),
        query,
        body: serde_json::from_slice(&body).ok(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
    };

    let (status, response) = (state.responder)(&request);
    state
        .requests
        .lock()
        .expect("requests lock poisoned")
        .push(request);

    (status, Json(response))
}

pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

pub fn client_for(url: &str) -> DoorayClient {
    init_crypto();
    let config = Config::new(url, TEST_TOKEN).expect("valid test config");
    DoorayClient::new(config).expect("Failed to build test client")
}

pub fn success(result: Value) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "header": {"isSuccessful": true, "resultCode": 0, "resultMessage": ""},
            "result": result,
        }),
    )
}

pub fn failure(code: &str, message: &str) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "header": {"isSuccessful": false, "resultCode": code, "resultMessage": message},
            "result": null,
        }),
    )
}

/// Parse the JSON text content of a tool result.
pub fn tool_json(result: &rmcp::model::CallToolResult) -> Value {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => {
            serde_json::from_str(&text.text).expect("tool output should be JSON")
        }
        _ => panic!("Expected text content"),
    }
}

/// The `kind` recorded in an MCP error's data.
pub fn error_kind(err: &rmcp::ErrorData) -> String {
    err.data
        .as_ref()
        .and_then(|data| data.get("kind"))
        .and_then(Value::as_str)
        .expect("error data should carry a kind")
        .to_string()
}

//! A local mock Supervisor for integration tests.
//!
//! Every request is recorded and answered by a plain closure, so each test
//! states exactly what the Supervisor sends back.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use hasupervisor_client::SupervisorClient;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const TOKEN: &str = "test-token";

/// One request as seen by the mock.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

type Responder = dyn Fn(&Recorded) -> Response + Send + Sync;

struct Shared {
    requests: Mutex<Vec<Recorded>>,
    respond: Box<Responder>,
}

pub struct MockSupervisor {
    pub base_url: String,
    shared: Option<Arc<Shared>>,
    handle: JoinHandle<()>,
}

impl MockSupervisor {
    /// Answer every request with `respond`.
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&Recorded) -> Response + Send + Sync + 'static,
    {
        let shared = Arc::new(Shared {
            requests: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        });
        let router = Router::new().fallback(record).with_state(shared.clone());
        let mut mock = Self::serve(router).await;
        mock.shared = Some(shared);
        mock
    }

    /// Serve a custom router, for handlers that need to be async.
    pub async fn serve(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("local TCP listener should bind");
        let addr = listener.local_addr().expect("resolved local listener address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Self {
            base_url: format!("http://{addr}"),
            shared: None,
            handle,
        }
    }

    pub fn client(&self) -> SupervisorClient {
        SupervisorClient::new(&self.base_url, TOKEN).expect("client should build")
    }

    pub fn requests(&self) -> Vec<Recorded> {
        let shared = self.shared.as_ref().expect("mock records requests");
        shared.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("at least one request")
    }
}

impl Drop for MockSupervisor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(shared): State<Arc<Shared>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = Recorded {
        method,
        path: uri.path().to_owned(),
        query: uri.query().map(str::to_owned),
        headers,
        body,
    };
    let response = (shared.respond)(&request);
    shared.requests.lock().unwrap().push(request);
    response
}

/// `{"result": "ok", "data": data}`
pub fn ok(data: Value) -> Response {
    envelope(StatusCode::OK, json!({"result": "ok", "data": data}))
}

/// `{"result": "ok", "data": {}}`
pub fn ok_empty() -> Response {
    ok(json!({}))
}

pub fn envelope(status: StatusCode, body: Value) -> Response {
    (status, axum::Json(body)).into_response()
}

pub fn text(status: StatusCode, body: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
}

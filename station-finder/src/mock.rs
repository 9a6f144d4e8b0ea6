//! Mock station backend for testing without a real server.
//!
//! Serves canned JSON on the same routes as the real backend and records
//! every request it receives, so tests can check what was (or was not) sent.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::error;

/// A request as seen by the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone)]
struct Failure {
    status: StatusCode,
    body: String,
}

/// Mock backend serving `/api/gas-stations` and `/api/gas-stations/nearby`.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    stations: Arc<Vec<Value>>,
    nearby: Arc<Vec<Value>>,
    failure: Option<Failure>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Create a backend that answers both routes with an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response of the station list route.
    pub fn with_stations(mut self, stations: Vec<Value>) -> Self {
        self.stations = Arc::new(stations);
        self
    }

    /// Set the response of the nearby route.
    pub fn with_nearby(mut self, stations: Vec<Value>) -> Self {
        self.nearby = Arc::new(stations);
        self
    }

    /// Make every route fail with the given status and text body.
    pub fn with_failure(mut self, status: StatusCode, body: impl Into<String>) -> Self {
        self.failure = Some(Failure {
            status,
            body: body.into(),
        });
        self
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/gas-stations", get(list_stations))
            .route("/api/gas-stations/nearby", get(nearby_stations))
            .with_state(self.clone())
    }

    /// Serve on `listener` in a background task.
    pub fn spawn(self, listener: TcpListener) -> std::io::Result<MockHandle> {
        let addr = listener.local_addr()?;
        let requests = self.requests.clone();
        let router = self.router();

        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                error!(error = %e, "mock backend stopped");
            }
        });

        Ok(MockHandle {
            addr,
            requests,
            task,
        })
    }

    /// Serve on an ephemeral port on localhost.
    pub async fn bind(self) -> std::io::Result<MockHandle> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        self.spawn(listener)
    }

    async fn record(&self, method: &Method, uri: &Uri, headers: &HeaderMap) {
        let request = RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            content_type: headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        };
        self.requests.lock().await.push(request);
    }

    fn respond(&self, stations: &[Value]) -> Response {
        match &self.failure {
            Some(failure) => (failure.status, failure.body.clone()).into_response(),
            None => Json(stations.to_vec()).into_response(),
        }
    }
}

/// Handle to a running mock backend. The server stops when this is dropped.
pub struct MockHandle {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl MockHandle {
    /// Origin to point a client at, e.g. `http://127.0.0.1:41234`.
    pub fn origin(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn list_stations(
    State(backend): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    backend.record(&method, &uri, &headers).await;
    backend.respond(&backend.stations)
}

async fn nearby_stations(
    State(backend): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    backend.record(&method, &uri, &headers).await;
    backend.respond(&backend.nearby)
}

/// A handful of Berlin stations for demos.
pub fn sample_stations() -> Vec<Value> {
    vec![
        json!({
            "id": "aral-alexanderplatz",
            "name": "Aral Alexanderplatz",
            "brand": "Aral",
            "address": "Alexanderplatz 1, 10178 Berlin",
            "lat": 52.5219,
            "lng": 13.4132,
            "prices": { "e5": 1.799, "e10": 1.739, "diesel": 1.659 }
        }),
        json!({
            "id": "shell-kreuzberg",
            "name": "Shell Kreuzberg",
            "brand": "Shell",
            "address": "Skalitzer Straße 60, 10997 Berlin",
            "lat": 52.4997,
            "lng": 13.4317,
            "prices": { "e5": 1.819, "e10": 1.759, "diesel": 1.679 }
        }),
        json!({
            "id": "total-charlottenburg",
            "name": "TotalEnergies Charlottenburg",
            "brand": "TotalEnergies",
            "address": "Kaiserdamm 32, 14057 Berlin",
            "lat": 52.5106,
            "lng": 13.2844,
            "prices": { "e5": 1.789, "e10": 1.729, "diesel": 1.649 }
        }),
    ]
}

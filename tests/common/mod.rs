//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Request, State},
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use lb_admin::RequestObserver;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UnixListener};

type Store = Arc<Mutex<BTreeMap<String, Value>>>;

/// A request as seen by the mock management API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub target: String,
    pub content_type: Option<String>,
}

/// In-memory state behind the mock management API.
#[derive(Clone, Default)]
pub struct AdminState {
    pub frontends: Store,
    pub backends: Store,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl AdminState {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lb_admin=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Router emulating the management API: stores JSON as given and echoes it.
pub fn admin_router(state: AdminState) -> Router {
    let frontends = Router::new()
        .route("/frontends", get(list_entries))
        .route(
            "/frontends/{key}",
            get(get_entry).put(put_entry).post(update_entry).delete(delete_entry),
        )
        .with_state(state.frontends.clone());

    let backends = Router::new()
        .route("/backends", get(list_entries))
        .route(
            "/backends/{key}",
            get(get_entry).put(put_entry).post(update_entry).delete(delete_entry),
        )
        .with_state(state.backends.clone());

    let rendered = Router::new()
        .route("/haproxy/config", get(rendered_config))
        .with_state(state.clone());

    frontends
        .merge(backends)
        .merge(rendered)
        .layer(middleware::from_fn_with_state(state, record_request))
}

async fn record_request(State(state): State<AdminState>, req: Request, next: Next) -> Response {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().clone(),
        target: req.uri().to_string(),
        content_type,
    });
    next.run(req).await
}

async fn list_entries(State(store): State<Store>) -> Json<Vec<Value>> {
    Json(store.lock().unwrap().values().cloned().collect())
}

async fn get_entry(State(store): State<Store>, Path(key): Path<String>) -> Response {
    match store.lock().unwrap().get(&key) {
        Some(value) => Json(value.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, "no such key").into_response(),
    }
}

async fn put_entry(
    State(store): State<Store>,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> StatusCode {
    store.lock().unwrap().insert(key, value);
    StatusCode::OK
}

async fn update_entry(
    State(store): State<Store>,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> Response {
    let mut store = store.lock().unwrap();
    let Some(existing) = store.get_mut(&key) else {
        return (StatusCode::NOT_FOUND, "no such key").into_response();
    };
    if let (Value::Object(existing), Value::Object(update)) = (existing, value) {
        for (field, v) in update {
            existing.insert(field, v);
        }
    }
    (StatusCode::OK, "{\"status\":\"updated\"}").into_response()
}

async fn delete_entry(State(store): State<Store>, Path(key): Path<String>) -> StatusCode {
    match store.lock().unwrap().remove(&key) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}

async fn rendered_config(State(state): State<AdminState>) -> String {
    let mut out = String::from("global\n    daemon\n");
    for (key, front) in state.frontends.lock().unwrap().iter() {
        out.push_str(&format!(
            "frontend {}\n    bind {}\n    default_backend {}\n",
            key,
            front["bind"].as_str().unwrap_or_default(),
            front["backend"].as_str().unwrap_or_default(),
        ));
    }
    for key in state.backends.lock().unwrap().keys() {
        out.push_str(&format!("backend {}\n", key));
    }
    out
}

/// Start the mock management API on an ephemeral TCP port.
pub async fn start_admin_server() -> (SocketAddr, AdminState) {
    let state = AdminState::default();
    let app = admin_router(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, state)
}

/// Start the mock management API on a fresh filesystem socket.
pub async fn start_admin_socket() -> (PathBuf, AdminState) {
    let path = std::env::temp_dir().join(format!("lb-admin-{}.sock", uuid::Uuid::new_v4()));
    let state = serve_admin_socket(&path).await;
    (path, state)
}

/// Serve the mock management API on the socket at `path`.
pub async fn serve_admin_socket(path: &std::path::Path) -> AdminState {
    let state = AdminState::default();
    let app = admin_router(state.clone());
    let listener = UnixListener::bind(path).unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    state
}

/// Start the mock management API on its own runtime thread, for blocking
/// clients.
pub fn spawn_admin_server_thread() -> (SocketAddr, AdminState) {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let state = AdminState::default();
            let app = admin_router(state.clone());
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send((listener.local_addr().unwrap(), state)).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    rx.recv_timeout(Duration::from_secs(5)).unwrap()
}

/// Start a programmable backend answering every request with `f()`.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Requests are small; one read is enough to consume the head.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            204 => "204 No Content",
                            400 => "400 Bad Request",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Backend that always answers with the given status and body.
pub async fn start_fixed_backend(status: u16, body: &'static str) -> SocketAddr {
    start_programmable_backend(move || async move { (status, body.to_string()) }).await
}

/// Observer collecting every request it sees.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    calls: Arc<Mutex<Vec<(Method, String, Option<Vec<u8>>)>>>,
}

impl RecordingObserver {
    pub fn calls(&self) -> Vec<(Method, String, Option<Vec<u8>>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RequestObserver for RecordingObserver {
    fn on_request(&self, method: &Method, path: &str, body: Option<&[u8]>) {
        self.calls
            .lock()
            .unwrap()
            .push((method.clone(), path.to_string(), body.map(<[u8]>::to_vec)));
    }
}

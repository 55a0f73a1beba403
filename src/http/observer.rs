//! Request observation hooks.
//!
//! Observers see every outgoing request before it is sent. The default is a
//! no-op so dispatching stays free of side effects unless a caller opts in.

use axum::http::Method;

/// Hook invoked with each outgoing request.
pub trait RequestObserver: Send + Sync {
    fn on_request(&self, method: &Method, path: &str, body: Option<&[u8]>);
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_request(&self, _method: &Method, _path: &str, _body: Option<&[u8]>) {}
}

/// Observer that emits a `tracing` event per request, including the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, method: &Method, path: &str, body: Option<&[u8]>) {
        let body = body.map(String::from_utf8_lossy).unwrap_or_default();
        tracing::info!(
            method = %method,
            path = %path,
            body = %body,
            "Sending request"
        );
    }
}

impl<F> RequestObserver for F
where
    F: Fn(&Method, &str, Option<&[u8]>) + Send + Sync,
{
    fn on_request(&self, method: &Method, path: &str, body: Option<&[u8]>) {
        self(method, path, body)
    }
}

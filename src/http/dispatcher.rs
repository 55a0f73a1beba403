//! Request dispatch and status classification.
//!
//! # Responsibilities
//! - Build the request (base address + verbatim path)
//! - Notify the request observer
//! - Send over the resolved transport
//! - Drain the full response body
//! - Map the status code to a typed outcome
//!
//! # Design Decisions
//! - The body is read before classification so the connection returns to
//!   the pool on every path
//! - Decoding is left to the caller; success returns raw bytes
//! - No retries, timeouts or redirect handling

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, Method, Request, StatusCode};

use crate::error::{Error, Result};
use crate::http::observer::RequestObserver;
use crate::net::{HttpTransport, ResolvedAddress};

/// JSON content type attached to requests carrying a body.
pub const APPLICATION_JSON: &str = "application/json";

/// Default cap on a buffered response body (64 MiB).
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 64 * 1024 * 1024;

/// Sends requests to the management API and classifies responses.
#[derive(Clone)]
pub struct Dispatcher {
    transport: HttpTransport,
    address: ResolvedAddress,
    observer: Arc<dyn RequestObserver>,
    max_response_bytes: usize,
}

impl Dispatcher {
    /// Create a dispatcher reporting each request to `observer`.
    pub fn with_observer(
        transport: HttpTransport,
        address: ResolvedAddress,
        observer: Arc<dyn RequestObserver>,
    ) -> Self {
        Self {
            transport,
            address,
            observer,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    /// Fail with a transport error instead of buffering more than `limit`
    /// response bytes.
    pub fn with_max_response_bytes(mut self, limit: usize) -> Self {
        self.max_response_bytes = limit;
        self
    }

    /// The normalized address requests are sent to.
    pub fn address(&self) -> &ResolvedAddress {
        &self.address
    }

    /// Send `method path` with an optional JSON body and return the raw
    /// response body on success.
    pub async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Bytes> {
        self.observer.on_request(&method, path, body.as_deref());

        let req = build_request(&self.address, method.clone(), path, body)?;

        let response = self.transport.request(req).await.map_err(|e| {
            tracing::debug!(method = %method, path = %path, error = %e, "Request failed");
            Error::transport(e)
        })?;

        let status = response.status();
        let data = axum::body::to_bytes(Body::new(response.into_body()), self.max_response_bytes)
            .await
            .map_err(Error::transport)?;

        tracing::debug!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            bytes = data.len(),
            "Response received"
        );

        classify(status, data)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("address", &self.address)
            .field("transport", &self.transport.kind())
            .field("max_response_bytes", &self.max_response_bytes)
            .finish_non_exhaustive()
    }
}

fn build_request(
    address: &ResolvedAddress,
    method: Method,
    path: &str,
    body: Option<Vec<u8>>,
) -> Result<Request<Body>> {
    let builder = Request::builder().method(method).uri(address.join(path));
    let req = match body {
        Some(bytes) => builder
            .header(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
            .body(Body::from(bytes))?,
        None => builder.body(Body::empty())?,
    };
    Ok(req)
}

/// Map a status code and fully-read body to the call's outcome.
pub(crate) fn classify(status: StatusCode, data: Bytes) -> Result<Bytes> {
    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound);
    }
    if status.as_u16() >= 400 {
        return Err(Error::Api {
            status,
            body: String::from_utf8_lossy(&data).into_owned(),
        });
    }
    Ok(data)
}

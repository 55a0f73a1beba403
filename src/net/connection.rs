//! Uniform "send a request, get a response" handle.
//!
//! # Responsibilities
//! - Own one pooled hyper client per endpoint kind
//! - Hide the endpoint kind from the dispatcher
//!
//! # Design Decisions
//! - Closed enum, resolved once at construction, no scheme checks per call
//! - Cloning shares the underlying connection pool

use axum::body::Body;
use axum::http::{Request, Response};
use hyper::body::Incoming;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::net::unix::UnixConnector;

/// Endpoint-specific hyper client.
#[derive(Clone, Debug)]
pub enum HttpTransport {
    /// Plain TCP to the host/port named in the request URI.
    Network(Client<HttpConnector, Body>),
    /// Every connection dials the same filesystem socket.
    LocalSocket(Client<UnixConnector, Body>),
}

impl HttpTransport {
    /// Transport that dials the request's host over TCP.
    pub fn network() -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        HttpTransport::Network(client)
    }

    /// Transport that dials `connector`'s socket for every request.
    pub fn local_socket(connector: UnixConnector) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(connector);
        HttpTransport::LocalSocket(client)
    }

    /// Issue a request over whichever endpoint this transport targets.
    pub async fn request(
        &self,
        req: Request<Body>,
    ) -> Result<Response<Incoming>, hyper_util::client::legacy::Error> {
        match self {
            HttpTransport::Network(client) => client.request(req).await,
            HttpTransport::LocalSocket(client) => client.request(req).await,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            HttpTransport::Network(_) => "network",
            HttpTransport::LocalSocket(_) => "local-socket",
        }
    }
}

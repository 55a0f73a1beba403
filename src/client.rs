//! Management API client.
//!
//! # Responsibilities
//! - Resolve the endpoint address into a transport once
//! - Own the dispatcher shared by every resource operation
//!
//! Resource operations live in `crate::resources`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::http::Method;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{
    Dispatcher, NoopObserver, RequestObserver, TracingObserver, DEFAULT_MAX_RESPONSE_BYTES,
};
use crate::net::{self, ResolvedAddress};

/// Client for the load balancer's management API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    dispatcher: Dispatcher,
}

impl Client {
    /// Create a client for `address` (`http://host:port` or
    /// `unix:///path/to/socket`).
    pub fn new(address: &str) -> Result<Self> {
        Self::builder(address).build()
    }

    /// Start building a client for `address`.
    pub fn builder(address: &str) -> ClientBuilder {
        ClientBuilder::new(address)
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Self::builder(&config.address);
        if config.log_requests {
            builder = builder.observer(TracingObserver);
        }
        builder.build()
    }

    /// The normalized address requests are sent to.
    pub fn address(&self) -> &ResolvedAddress {
        self.dispatcher.address()
    }

    pub(crate) async fn send(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Bytes> {
        self.dispatcher.send(method, path, body).await
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    address: String,
    observer: Arc<dyn RequestObserver>,
    max_response_bytes: usize,
}

impl ClientBuilder {
    fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            observer: Arc::new(NoopObserver),
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    /// Hook invoked with method, path and body of every outgoing request.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: RequestObserver + 'static,
    {
        self.observer = Arc::new(observer);
        self
    }

    /// Largest response body the client will buffer; bigger bodies fail
    /// as transport errors.
    pub fn max_response_bytes(mut self, limit: usize) -> Self {
        self.max_response_bytes = limit;
        self
    }

    /// Resolve the address and build the client.
    pub fn build(self) -> Result<Client> {
        let (transport, address) = net::resolve(&self.address)?;

        tracing::info!(
            address = %address,
            base = %address.base(),
            transport = transport.kind(),
            "Management client created"
        );

        Ok(Client {
            dispatcher: Dispatcher::with_observer(transport, address, self.observer)
                .with_max_response_bytes(self.max_response_bytes),
        })
    }
}

//! Blocking management client.
//!
//! # Responsibilities
//! - Expose every resource operation as a thread-blocking call
//! - Drive the async [`crate::Client`] on an owned tokio runtime
//!
//! # Design Decisions
//! - One small multi-threaded runtime per client so hyper's connection
//!   tasks keep running between calls and `block_on` may be entered from
//!   several threads at once
//! - Must not be created, used or dropped inside an async context

use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::RequestObserver;
use crate::net::ResolvedAddress;
use crate::resources::{Backend, Frontend};

/// Synchronous counterpart of [`crate::Client`].
#[derive(Clone)]
pub struct Client {
    inner: crate::Client,
    runtime: Arc<Runtime>,
}

impl Client {
    /// Create a blocking client for `address`.
    pub fn new(address: &str) -> Result<Self> {
        Self::wrap(crate::Client::new(address)?)
    }

    /// Create a blocking client that reports requests to `observer`.
    pub fn with_observer<O>(address: &str, observer: O) -> Result<Self>
    where
        O: RequestObserver + 'static,
    {
        Self::wrap(crate::Client::builder(address).observer(observer).build()?)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::wrap(crate::Client::from_config(config)?)
    }

    fn wrap(inner: crate::Client) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("lb-admin-blocking")
            .enable_all()
            .build()
            .map_err(Error::transport)?;
        Ok(Self {
            inner,
            runtime: Arc::new(runtime),
        })
    }

    pub fn address(&self) -> &ResolvedAddress {
        self.inner.address()
    }

    pub fn get_frontends(&self) -> Result<Vec<Frontend>> {
        self.runtime.block_on(self.inner.get_frontends())
    }

    pub fn get_frontend(&self, key: &str) -> Result<Frontend> {
        self.runtime.block_on(self.inner.get_frontend(key))
    }

    pub fn put_frontend(&self, key: &str, frontend: &Frontend) -> Result<()> {
        self.runtime.block_on(self.inner.put_frontend(key, frontend))
    }

    pub fn delete_frontend(&self, key: &str) -> Result<()> {
        self.runtime.block_on(self.inner.delete_frontend(key))
    }

    pub fn get_backends(&self) -> Result<Vec<Backend>> {
        self.runtime.block_on(self.inner.get_backends())
    }

    pub fn get_backend(&self, key: &str) -> Result<Backend> {
        self.runtime.block_on(self.inner.get_backend(key))
    }

    pub fn put_backend(&self, key: &str, backend: &Backend) -> Result<()> {
        self.runtime.block_on(self.inner.put_backend(key, backend))
    }

    pub fn update_backend(&self, key: &str, backend: &Backend) -> Result<()> {
        self.runtime.block_on(self.inner.update_backend(key, backend))
    }

    pub fn delete_backend(&self, key: &str) -> Result<()> {
        self.runtime.block_on(self.inner.delete_backend(key))
    }

    /// Fetch the proxy's fully rendered configuration as plain text.
    pub fn get_haproxy_config(&self) -> Result<String> {
        self.runtime.block_on(self.inner.get_haproxy_config())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Client")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

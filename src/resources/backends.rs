//! Backend operations.

use axum::http::Method;

use crate::client::Client;
use crate::error::Result;
use crate::resources::{decode, decode_list, encode, keyed_path, Backend, BACKENDS_PATH};

impl Client {
    /// List every backend.
    pub async fn get_backends(&self) -> Result<Vec<Backend>> {
        let data = self.send(Method::GET, BACKENDS_PATH, None).await?;
        decode_list(&data)
    }

    /// Fetch the backend stored under `key`.
    ///
    /// Returns [`Error::NotFound`](crate::Error::NotFound) if it does not exist.
    pub async fn get_backend(&self, key: &str) -> Result<Backend> {
        let path = keyed_path(BACKENDS_PATH, key)?;
        let data = self.send(Method::GET, &path, None).await?;
        decode(&data)
    }

    /// Create or replace the backend stored under `key`.
    pub async fn put_backend(&self, key: &str, backend: &Backend) -> Result<()> {
        let path = keyed_path(BACKENDS_PATH, key)?;
        let body = encode(backend)?;
        self.send(Method::PUT, &path, Some(body)).await?;
        Ok(())
    }

    /// Partially update the backend stored under `key`.
    pub async fn update_backend(&self, key: &str, backend: &Backend) -> Result<()> {
        let path = keyed_path(BACKENDS_PATH, key)?;
        let body = encode(backend)?;
        self.send(Method::POST, &path, Some(body)).await?;
        Ok(())
    }

    /// Delete the backend stored under `key`.
    pub async fn delete_backend(&self, key: &str) -> Result<()> {
        let path = keyed_path(BACKENDS_PATH, key)?;
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }
}

//! Frontend operations.

use axum::http::Method;

use crate::client::Client;
use crate::error::Result;
use crate::resources::{decode, decode_list, encode, keyed_path, Frontend, FRONTENDS_PATH};

impl Client {
    /// List every frontend.
    pub async fn get_frontends(&self) -> Result<Vec<Frontend>> {
        let data = self.send(Method::GET, FRONTENDS_PATH, None).await?;
        decode_list(&data)
    }

    /// Fetch the frontend stored under `key`.
    pub async fn get_frontend(&self, key: &str) -> Result<Frontend> {
        let path = keyed_path(FRONTENDS_PATH, key)?;
        let data = self.send(Method::GET, &path, None).await?;
        decode(&data)
    }

    /// Create or replace the frontend stored under `key`.
    pub async fn put_frontend(&self, key: &str, frontend: &Frontend) -> Result<()> {
        let path = keyed_path(FRONTENDS_PATH, key)?;
        let body = encode(frontend)?;
        self.send(Method::PUT, &path, Some(body)).await?;
        Ok(())
    }

    pub async fn delete_frontend(&self, key: &str) -> Result<()> {
        let path = keyed_path(FRONTENDS_PATH, key)?;
        self.send(Method::DELETE, &path, None).await?;
        Ok(())
    }
}

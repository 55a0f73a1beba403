//! Rendered proxy configuration.

use axum::http::Method;

use crate::client::Client;
use crate::error::Result;
use crate::resources::HAPROXY_CONFIG_PATH;

impl Client {
    /// Fetch the proxy's fully rendered configuration as plain text.
    ///
    /// Invalid UTF-8 is replaced rather than reported.
    pub async fn get_haproxy_config(&self) -> Result<String> {
        let data = self.send(Method::GET, HAPROXY_CONFIG_PATH, None).await?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}

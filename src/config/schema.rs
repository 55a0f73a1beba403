//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the management client.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Management API address (`http://host:port` or `unix:///path`).
    pub address: String,

    /// Emit a tracing event with the body of every outgoing request.
    pub log_requests: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address: "http://localhost:10000".to_string(),
            log_requests: false,
        }
    }
}

//! Wire types for the management API.
//!
//! Entities carry no key; the key is always a path parameter.

use serde::{Deserialize, Serialize};

/// One upstream endpoint inside a backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    /// Member identifier.
    pub id: String,
    pub host: String,
    pub port: u16,
}

impl Member {
    pub fn new(id: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            id: id.into(),
            host: host.into(),
            port,
        }
    }
}

/// A pool of upstream members.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Backend {
    /// Discovery mode (e.g. "static", "dynamic").
    #[serde(rename = "type")]
    pub kind: String,

    /// Traffic mode (e.g. "tcp", "http").
    pub mode: String,

    /// Ordered member list.
    pub members: Vec<Member>,
}

/// A listener routing traffic to a named backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Frontend {
    #[serde(rename = "type")]
    pub kind: String,

    /// Bind spec (e.g. "*:4001").
    pub bind: String,

    /// Name of the backend this frontend routes to.
    pub backend: String,

    /// Traffic mode (e.g. "tcp", "http").
    pub mode: String,
}

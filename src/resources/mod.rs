//! Resource operations.
//!
//! # Responsibilities
//! - One typed operation per (resource, verb) pair
//! - Reject empty keys before any I/O
//! - Encode request entities and decode response bodies as JSON
//!
//! # Design Decisions
//! - Operations are `impl Client` blocks, one file per resource
//! - Response decoding happens here, never in the dispatcher

pub mod backends;
pub mod frontends;
pub mod haproxy;
pub mod types;

pub use types::{Backend, Frontend, Member};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Collection path for frontends.
pub const FRONTENDS_PATH: &str = "/frontends";

/// Collection path for backends.
pub const BACKENDS_PATH: &str = "/backends";

/// Path of the rendered proxy configuration.
pub const HAPROXY_CONFIG_PATH: &str = "/haproxy/config";

/// `<collection>/<key>`, rejecting an empty key.
pub(crate) fn keyed_path(collection: &str, key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(Error::KeyRequired);
    }
    Ok(format!("{}/{}", collection, key))
}

pub(crate) fn encode<T: Serialize>(entity: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(entity).map_err(Error::Encode)
}

pub(crate) fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    serde_json::from_slice(data).map_err(Error::Decode)
}

/// Decode a JSON array; `null` and an empty body are treated as no results.
pub(crate) fn decode_list<T: DeserializeOwned>(data: &[u8]) -> Result<Vec<T>> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    let items: Option<Vec<T>> = decode(data)?;
    Ok(items.unwrap_or_default())
}

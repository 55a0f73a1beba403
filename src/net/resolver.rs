//! Address resolution.
//!
//! # Responsibilities
//! - Parse the caller's endpoint address
//! - Pick the endpoint kind (TCP or filesystem socket)
//! - Normalize the base address to `scheme://host[:port]`
//!
//! # Design Decisions
//! - The result is an immutable value; nothing mutates it after resolution
//! - `unix://` addresses are presented as `http://unix.sock` so URI
//!   construction downstream stays well-formed

use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{Error, Result};
use crate::net::connection::HttpTransport;
use crate::net::unix::UnixConnector;

/// Scheme naming a filesystem-socket endpoint.
pub const UNIX_SCHEME: &str = "unix";

/// Only network scheme the TCP transport speaks.
pub const HTTP_SCHEME: &str = "http";

/// Base address presented for filesystem-socket endpoints.
pub const UNIX_BASE: &str = "http://unix.sock";

/// Where connections actually go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// The host/port in the base address.
    Network,
    /// A filesystem socket; the base address host is a placeholder.
    LocalSocket(PathBuf),
}

/// Normalized base address plus the endpoint it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    base: String,
    endpoint: Endpoint,
}

impl ResolvedAddress {
    /// Parse `address` without building a transport.
    pub fn parse(address: &str) -> Result<Self> {
        let url = Url::parse(address).map_err(|e| Error::Address {
            address: address.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() == UNIX_SCHEME {
            let path = url.path();
            if path.is_empty() || path == "/" {
                return Err(Error::Address {
                    address: address.to_string(),
                    reason: "missing socket path".to_string(),
                });
            }
            // `Url::path` is still percent-encoded; the socket lives at the decoded path.
            let decoded: Vec<u8> = percent_decode_str(path).collect();
            return Ok(Self {
                base: UNIX_BASE.to_string(),
                endpoint: Endpoint::LocalSocket(PathBuf::from(OsStr::from_bytes(&decoded))),
            });
        }

        if url.scheme() != HTTP_SCHEME {
            return Err(Error::Address {
                address: address.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host,
            _ => {
                return Err(Error::Address {
                    address: address.to_string(),
                    reason: "missing host".to_string(),
                })
            }
        };

        // Path, query, fragment and credentials are dropped.
        let base = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };

        Ok(Self {
            base,
            endpoint: Endpoint::Network,
        })
    }

    /// `scheme://host[:port]` with no trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Socket path for filesystem-socket endpoints.
    pub fn socket_path(&self) -> Option<&Path> {
        match &self.endpoint {
            Endpoint::LocalSocket(path) => Some(path),
            Endpoint::Network => None,
        }
    }

    /// Full request target for `path`, appended verbatim.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

impl std::fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.endpoint {
            Endpoint::Network => write!(f, "{}", self.base),
            Endpoint::LocalSocket(path) => write!(f, "unix://{}", path.display()),
        }
    }
}

/// Resolve `address` into a ready transport and its normalized address.
pub fn resolve(address: &str) -> Result<(HttpTransport, ResolvedAddress)> {
    let resolved = ResolvedAddress::parse(address)?;
    let transport = match resolved.endpoint() {
        Endpoint::Network => HttpTransport::network(),
        Endpoint::LocalSocket(path) => HttpTransport::local_socket(UnixConnector::new(path.clone())),
    };
    Ok((transport, resolved))
}

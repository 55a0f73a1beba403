//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! address string
//!     → resolver.rs (parse, pick endpoint, normalize base)
//!     → connection.rs (HttpTransport: TCP or Unix-socket hyper client)
//!     → unix.rs (connector dialing a fixed socket path)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Endpoint kind is decided once, at construction
//! - Path components of the address never reach request URIs

pub mod connection;
pub mod resolver;
pub mod unix;

pub use connection::HttpTransport;
pub use resolver::{resolve, Endpoint, ResolvedAddress};
pub use unix::UnixConnector;

//! Load balancer management client.
//!
//! Creates, reads, updates and deletes frontend and backend definitions
//! through the load balancer's management API, and fetches the rendered
//! proxy configuration.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller
//!     │  get_backends / put_frontend / ...
//!     ▼
//!  ┌──────────────┐   JSON encode/decode, key checks
//!  │  resources   │
//!  └──────┬───────┘
//!         │ method, path, body bytes
//!         ▼
//!  ┌──────────────┐   observer hook, status classification,
//!  │ http         │   full body drain
//!  │ dispatcher   │
//!  └──────┬───────┘
//!         ▼
//!  ┌──────────────┐   TCP (http://host:port) or
//!  │ net          │   filesystem socket (unix:///path)
//!  │ transport    │
//!  └──────┬───────┘
//!         ▼
//!    management API
//! ```
//!
//! # Example
//!
//! ```no_run
//! use lb_admin::{Backend, Client, Member};
//!
//! # async fn run() -> lb_admin::Result<()> {
//! let client = Client::new("unix:///var/run/lb/admin.sock")?;
//! let backend = Backend {
//!     kind: "static".into(),
//!     mode: "tcp".into(),
//!     members: vec![Member::new("web-1", "192.168.0.13", 8081)],
//! };
//! client.put_backend("web", &backend).await?;
//!
//! match client.get_backend("web").await {
//!     Ok(found) => assert_eq!(found, backend),
//!     Err(e) if e.is_not_found() => println!("gone already"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

// Core subsystems
pub mod http;
pub mod net;
pub mod resources;

// Client surfaces
pub mod blocking;
pub mod client;

// Cross-cutting concerns
pub mod config;
pub mod error;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{NoopObserver, RequestObserver, TracingObserver};
pub use net::{Endpoint, ResolvedAddress};
pub use resources::{Backend, Frontend, Member};

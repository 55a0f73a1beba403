//! HTTP request/response subsystem.
//!
//! # Data Flow
//! ```text
//! resource operation (method, path, JSON bytes)
//!     → observer.rs (optional request hook)
//!     → dispatcher.rs (build request, send over transport)
//!     → dispatcher.rs (drain body, classify status)
//!     → raw bytes back to the resource operation
//! ```

pub mod dispatcher;
pub mod observer;

pub use dispatcher::{Dispatcher, APPLICATION_JSON, DEFAULT_MAX_RESPONSE_BYTES};
pub use observer::{NoopObserver, RequestObserver, TracingObserver};

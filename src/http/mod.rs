//! HTTP front door subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, shutdown)
//!     → handlers.rs (route dispatch, guard order, forwarding)
//!     → static_files.rs (asset serving for /static)
//!     → JSON response (or HTML for / and static assets)
//! ```
//!
//! # Design Decisions
//! - Guards run inside the proxy handler, in a fixed order, rather than
//!   as separate middleware: budgets are per-mount, not per-listener
//! - Every non-HTML response is application/json, including all errors
//! - Panics are caught at the middleware boundary and rendered as the
//!   generic JSON 500 body

pub mod handlers;
pub mod server;
pub mod static_files;

pub use server::{AppState, HttpServer};

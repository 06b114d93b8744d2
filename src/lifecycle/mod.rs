//! Lifecycle management subsystem.
//!
//! # Design Decisions
//! - Startup order is fixed in main: config, tracing, bind, serve
//! - Shutdown is a broadcast signal; the serve loop finishes in-flight
//!   requests before returning

pub mod shutdown;

pub use shutdown::Shutdown;

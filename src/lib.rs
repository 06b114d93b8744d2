//! Guarded JSON API Proxy Library

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod security;
pub mod upstream;
pub mod util;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

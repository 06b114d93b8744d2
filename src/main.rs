//! Guarded JSON API Proxy
//!
//! A small reverse proxy built with Tokio and Axum that forwards requests
//! to two fixed upstream JSON APIs behind a pair of request guards.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                  API PROXY                    │
//!                       │                                               │
//!     Client Request    │  ┌─────────┐   ┌────────────┐   ┌─────────┐  │
//!     ──────────────────┼─▶│  http   │──▶│  security  │──▶│upstream │──┼──▶ Upstream
//!                       │  │ router  │   │ rate limit │   │forwarder│  │     API
//!                       │  └─────────┘   │ + denylist │   └────┬────┘  │
//!                       │                └────────────┘        │       │
//!     Client Response   │  ┌──────────────────────────┐        │       │
//!     ◀─────────────────┼──│ JSON envelope / verbatim │◀───────┘       │
//!                       │  └──────────────────────────┘                │
//!                       │                                               │
//!                       │  ┌─────────────────────────────────────────┐ │
//!                       │  │          Cross-Cutting Concerns          │ │
//!                       │  │  ┌────────┐ ┌──────────────┐ ┌────────┐  │ │
//!                       │  │  │ config │ │ observability│ │lifecycle│ │ │
//!                       │  │  └────────┘ └──────────────┘ └────────┘  │ │
//!                       │  └─────────────────────────────────────────┘ │
//!                       └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_proxy::config::loader::load_from_env;
use api_proxy::http::HttpServer;
use api_proxy::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before tracing so the configured level applies
    let config = load_from_env()?;

    // Initialize tracing subscriber
    let default_filter = format!("api_proxy={},tower_http=info", config.observability.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("api-proxy v0.1.0 starting");

    tracing::info!(
        port = config.listener.port,
        upstreams = config.upstreams.len(),
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    // Bind TCP listener on all interfaces
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Wire up graceful shutdown on Ctrl+C
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

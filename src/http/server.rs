//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, panic recovery)
//! - Serve on a caller-provided listener with graceful shutdown

use std::any::Any;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, Response, StatusCode},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestId, RequestId},
    timeout::TimeoutLayer,
    trace::TraceLayer,
    ServiceBuilderExt,
};
use uuid::Uuid;

use crate::config::ProxyConfig;
use crate::http::handlers;
use crate::security::RateLimiter;
use crate::upstream::{UpstreamError, UpstreamRegistry};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstreams: Arc<UpstreamRegistry>,
    pub limiter: Arc<RateLimiter>,
    pub static_dir: Arc<PathBuf>,
}

/// HTTP server for the API proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails if any configured upstream base URL does not parse.
    pub fn new(config: ProxyConfig) -> Result<Self, UpstreamError> {
        let upstreams = UpstreamRegistry::from_config(
            &config.upstreams,
            &config.guards,
            Duration::from_secs(config.timeouts.upstream_secs),
        )?;
        let limiter = RateLimiter::new(Duration::from_secs(config.guards.window_secs));

        let state = AppState {
            upstreams: Arc::new(upstreams),
            limiter: Arc::new(limiter),
            static_dir: Arc::new(PathBuf::from(&config.static_dir)),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .set_x_request_id(RequestUuid)
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(CatchPanicLayer::custom(handle_panic))
            .propagate_x_request_id();

        Router::new()
            .route("/", get(handlers::index_handler))
            .route("/health", get(handlers::health_handler))
            .route("/static/{*path}", get(handlers::static_handler))
            .route("/api/{upstream}/{*api_path}", get(handlers::proxy_handler))
            .fallback(handlers::not_found_handler)
            .with_state(state)
            .layer(middleware)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// UUID v4 request IDs for the x-request-id header.
#[derive(Clone, Copy)]
struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Render an unhandled panic as the generic JSON 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(detail = %detail, "Handler panicked");

    let body = serde_json::json!({ "error": "Internal server error" }).to_string();
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}

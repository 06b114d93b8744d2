//! Route handlers.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::error::ProxyError;
use crate::http::server::AppState;
use crate::http::static_files;
use crate::security;
use crate::util::now_epoch_secs;

/// `GET /` - landing page.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// `GET /health` - unguarded liveness probe.
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": now_epoch_secs()
    }))
}

/// `GET /static/{*path}` - static asset serving.
pub async fn static_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Response {
    static_files::serve(&state.static_dir, &path).await
}

/// `GET /api/{upstream}/{*api_path}` - the guarded proxy path.
///
/// Guard order is rate limit first, then input filter; a rejected request
/// never reaches the upstream.
pub async fn proxy_handler(
    State(state): State<AppState>,
    Path((upstream, api_path)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(target) = state.upstreams.get(&upstream) else {
        return ProxyError::NotFound.into_response();
    };

    if !state.limiter.allow(&target.name, target.rate_limit_per_minute) {
        return ProxyError::RateLimited.into_response();
    }

    if !security::validate(params.values().map(String::as_str)) {
        return ProxyError::InvalidInput.into_response();
    }

    tracing::debug!(
        upstream = %target.name,
        api_path = %api_path,
        params = params.len(),
        "Proxying request"
    );

    match target.forwarder.forward(&api_path, &params).await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Fallback for unmatched paths.
pub async fn not_found_handler() -> Response {
    ProxyError::NotFound.into_response()
}

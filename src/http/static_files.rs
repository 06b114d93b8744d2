//! Traversal-safe static asset serving.
//!
//! # Responsibilities
//! - Serve files from the configured static directory
//! - Reject any path that could escape that directory
//!
//! # Design Decisions
//! - Component-wise sanitization: only plain name components are
//!   accepted, so `..`, absolute paths and drive prefixes never reach
//!   the filesystem. Traversal attempts and missing files are both 404,
//!   which keeps the directory layout unobservable.
//! - Content type comes from a small extension map; unknown extensions
//!   are served as octet-stream

use std::path::{Component, Path, PathBuf};

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::ProxyError;

/// Serve `requested` relative to `root`, or a JSON 404.
pub async fn serve(root: &Path, requested: &str) -> Response {
    let Some(relative) = sanitize(requested) else {
        tracing::warn!(path = %requested, "Rejected static asset path");
        return ProxyError::NotFound.into_response();
    };

    let full = root.join(relative);
    match tokio::fs::read(&full).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&full))], bytes).into_response(),
        Err(_) => ProxyError::NotFound.into_response(),
    }
}

/// Reduce a requested path to plain name components, or reject it.
fn sanitize(requested: &str) -> Option<PathBuf> {
    let mut clean = PathBuf::new();
    for component in Path::new(requested).components() {
        match component {
            Component::Normal(part) => clean.push(part),
            // CurDir is harmless but rejecting it keeps the rule simple
            _ => return None,
        }
    }
    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits; defaults describe the production setup so
//! tests can start from `ProxyConfig::default()` and override single fields.

use serde::{Deserialize, Serialize};

/// Root configuration for the API proxy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind port).
    pub listener: ListenerConfig,

    /// Upstream API definitions, one per `/api/<name>` mount.
    pub upstreams: Vec<UpstreamConfig>,

    /// Request guard settings shared by all guarded routes.
    pub guards: GuardConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Directory that static assets are served from.
    pub static_dir: String,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            upstreams: default_upstreams(),
            guards: GuardConfig::default(),
            timeouts: TimeoutConfig::default(),
            static_dir: "static".to_string(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// The two fixed upstream APIs this service proxies to.
fn default_upstreams() -> Vec<UpstreamConfig> {
    vec![
        UpstreamConfig {
            name: "nabi".to_string(),
            base_url: "https://nabi-sorgu-api.system.22web.org".to_string(),
            rate_limit_per_minute: Some(30),
        },
        UpstreamConfig {
            name: "newvip".to_string(),
            base_url: "https://newvip.nabi.22web.org/api".to_string(),
            rate_limit_per_minute: Some(30),
        },
    ]
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Port to listen on. Overridable via the PORT environment variable.
    pub port: u16,
}

impl ListenerConfig {
    /// Bind address string; the service binds all interfaces.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

/// A single upstream API mounted under `/api/<name>`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Mount key, also the rate-limiter route identifier.
    pub name: String,

    /// Base URL the caller-supplied API path is appended to.
    pub base_url: String,

    /// Per-minute call budget for this mount. Falls back to
    /// `GuardConfig::default_per_minute` when absent.
    #[serde(default)]
    pub rate_limit_per_minute: Option<u32>,
}

/// Request guard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Default per-minute budget for guarded routes without their own.
    pub default_per_minute: u32,

    /// Sliding window length in seconds.
    pub window_secs: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            default_per_minute: 60,
            window_secs: 60,
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Outbound upstream call timeout in seconds.
    pub upstream_secs: u64,

    /// Total request timeout in seconds (covers the upstream budget).
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            upstream_secs: 10,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

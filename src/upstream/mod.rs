//! Upstream forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Guarded request (mount key, api path, query params)
//!     → UpstreamRegistry (mount key → target lookup)
//!     → forwarder.rs (single-shot GET, outcome classification)
//!     → Ok: opaque JSON payload, relayed verbatim
//!     → Err: classified ProxyError, rendered as an envelope
//! ```
//!
//! # Design Decisions
//! - Registry compiled at startup from config, immutable at runtime
//! - Base URLs are validated at registry build so a bad config fails
//!   the process before it accepts traffic
//! - One shared HTTP client; forwarders hold cheap clones

pub mod forwarder;

use std::collections::HashMap;
use std::time::Duration;

use crate::config::{GuardConfig, UpstreamConfig};
pub use forwarder::Forwarder;

/// Error type for registry construction.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid base URL for upstream {name:?}: {source}")]
    InvalidBaseUrl {
        name: String,
        source: url::ParseError,
    },
}

/// One configured upstream mount.
#[derive(Debug)]
pub struct UpstreamTarget {
    /// Mount key, doubles as the rate-limiter route identifier.
    pub name: String,

    /// Forwarder bound to this upstream's base URL.
    pub forwarder: Forwarder,

    /// Per-minute call budget for this mount.
    pub rate_limit_per_minute: u32,
}

/// Immutable map from mount key to upstream target.
#[derive(Debug)]
pub struct UpstreamRegistry {
    targets: HashMap<String, UpstreamTarget>,
}

impl UpstreamRegistry {
    /// Compile the registry from configuration.
    ///
    /// Mounts without their own budget inherit the guard default.
    pub fn from_config(
        upstreams: &[UpstreamConfig],
        guards: &GuardConfig,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::new();
        let mut targets = HashMap::new();

        for upstream in upstreams {
            let forwarder = Forwarder::new(client.clone(), &upstream.base_url, timeout).map_err(
                |source| UpstreamError::InvalidBaseUrl {
                    name: upstream.name.clone(),
                    source,
                },
            )?;

            targets.insert(
                upstream.name.clone(),
                UpstreamTarget {
                    name: upstream.name.clone(),
                    forwarder,
                    rate_limit_per_minute: upstream
                        .rate_limit_per_minute
                        .unwrap_or(guards.default_per_minute),
                },
            );
        }

        Ok(Self { targets })
    }

    /// Look up a target by mount key.
    pub fn get(&self, name: &str) -> Option<&UpstreamTarget> {
        self.targets.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let config = crate::config::ProxyConfig::default();
        let registry =
            UpstreamRegistry::from_config(&config.upstreams, &config.guards, Duration::from_secs(10))
                .unwrap();

        assert!(registry.get("nabi").is_some());
        assert!(registry.get("newvip").is_some());
        assert!(registry.get("other").is_none());
        assert_eq!(registry.get("nabi").unwrap().rate_limit_per_minute, 30);
    }

    #[test]
    fn test_missing_budget_inherits_guard_default() {
        let guards = GuardConfig::default();
        let upstreams = vec![UpstreamConfig {
            name: "plain".to_string(),
            base_url: "https://example.org".to_string(),
            rate_limit_per_minute: None,
        }];

        let registry =
            UpstreamRegistry::from_config(&upstreams, &guards, Duration::from_secs(10)).unwrap();
        assert_eq!(registry.get("plain").unwrap().rate_limit_per_minute, 60);
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        let upstreams = vec![UpstreamConfig {
            name: "broken".to_string(),
            base_url: "not a url".to_string(),
            rate_limit_per_minute: Some(30),
        }];

        let err = UpstreamRegistry::from_config(
            &upstreams,
            &GuardConfig::default(),
            Duration::from_secs(10),
        )
        .unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}

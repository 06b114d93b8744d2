//! Single-shot upstream forwarding.
//!
//! # Responsibilities
//! - Build the target URL from the base and the caller-supplied path
//! - Issue one outbound GET with forwarded query parameters
//! - Classify the outcome into the proxy's error taxonomy
//!
//! # Design Decisions
//! - No retries; every failure is surfaced to the caller immediately
//! - HTTP 200 is the only success: the body is parsed as JSON and
//!   relayed verbatim, any other status propagates as-is
//! - The timeout covers connect, send and body read

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::error::ProxyError;

/// Stateless forwarder for one upstream base URL.
#[derive(Clone, Debug)]
pub struct Forwarder {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl Forwarder {
    /// Create a forwarder. Fails if the base URL does not parse.
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            timeout,
        })
    }

    /// Target URL for a caller-supplied API path: `<base>/<path>`.
    fn target_url(&self, api_path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            api_path.trim_start_matches('/')
        )
    }

    /// Forward one GET and classify the outcome.
    pub async fn forward(
        &self,
        api_path: &str,
        params: &HashMap<String, String>,
    ) -> Result<Value, ProxyError> {
        let url = self.target_url(api_path);

        tracing::debug!(url = %url, "Forwarding upstream request");

        let response = match self
            .client
            .get(&url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!(url = %url, "Upstream request timed out");
                return Err(ProxyError::UpstreamTimeout);
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Upstream connection failed");
                return Err(ProxyError::UpstreamConnection(e.to_string()));
            }
        };

        let status = response.status();
        if status.as_u16() != 200 {
            tracing::warn!(url = %url, status = %status, "Upstream returned error status");
            return Err(ProxyError::UpstreamStatus(status.as_u16()));
        }

        match response.json::<Value>().await {
            Ok(body) => Ok(body),
            Err(e) if e.is_timeout() => Err(ProxyError::UpstreamTimeout),
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Upstream body was not valid JSON");
                Err(ProxyError::Internal(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forwarder(base: &str) -> Forwarder {
        Forwarder::new(reqwest::Client::new(), base, Duration::from_secs(10)).unwrap()
    }

    #[test]
    fn test_target_url_joins_with_single_slash() {
        let f = forwarder("https://api.example.org");
        assert_eq!(f.target_url("sorgu"), "https://api.example.org/sorgu");
        assert_eq!(f.target_url("a/b"), "https://api.example.org/a/b");
    }

    #[test]
    fn test_target_url_handles_trailing_base_slash() {
        let f = forwarder("https://api.example.org/api/");
        assert_eq!(f.target_url("tc"), "https://api.example.org/api/tc");
        assert_eq!(f.target_url("/tc"), "https://api.example.org/api/tc");
    }
}

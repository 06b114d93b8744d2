//! Configuration loading from the environment.

use crate::config::schema::ProxyConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// Build the configuration: built-in defaults plus the PORT overlay.
pub fn load_from_env() -> Result<ProxyConfig, ConfigError> {
    let mut config = ProxyConfig::default();

    if let Ok(raw) = std::env::var("PORT") {
        config.listener.port = raw.trim().parse().map_err(|source| ConfigError::InvalidPort {
            value: raw.clone(),
            source,
        })?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_parse_failure_is_reported() {
        // Exercise the parse path directly; mutating the process environment
        // races with other tests.
        let raw = "not-a-port".to_string();
        let result: Result<u16, _> = raw.trim().parse();
        let err = ConfigError::InvalidPort {
            value: raw,
            source: result.unwrap_err(),
        };
        assert!(err.to_string().contains("not-a-port"));
    }
}

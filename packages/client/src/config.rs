//! Client configuration, optionally populated from environment variables.

use std::time::Duration;

/// Default beacon node REST endpoint (the port most clients listen on).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5052";

/// Runtime configuration for a [`BeaconNodeClient`](crate::BeaconNodeClient).
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `BEACON_NODE_URL` | `http://localhost:5052` | Base URL of the beacon node REST API |
/// | `BEACON_TIMEOUT_SECS` | `30` | Per-request timeout in seconds |
/// | `BEACON_USER_AGENT` | `beacon-node-client/<version>` | `User-Agent` header value |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host, and optional path prefix, e.g. `"http://localhost:5052"`.
    /// A trailing slash is ignored.
    pub base_url: String,

    /// Per-request timeout applied by the HTTP transport.
    pub timeout: Duration,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("beacon-node-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Populate config from environment variables, applying defaults where
    /// absent or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout = std::env::var("BEACON_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            base_url: std::env::var("BEACON_NODE_URL").unwrap_or(defaults.base_url),
            timeout,
            user_agent: std::env::var("BEACON_USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Override the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5052");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("beacon-node-client/"));
    }

    #[test]
    fn new_keeps_other_defaults() {
        let config = ClientConfig::new("http://node:5052").with_timeout(Duration::from_secs(2));
        assert_eq!(config.base_url, "http://node:5052");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.user_agent, ClientConfig::default().user_agent);
    }
}

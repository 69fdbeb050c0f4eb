//! Configuration for the livestream-status client.
//!
//! The endpoint is injected rather than hard-coded so tests can point the
//! client at a local mock server. Supports environment variable overrides
//! for runtime customization.

use std::time::Duration;

use url::Url;

/// Default production endpoint returning the status of all active livestreams.
pub const DEFAULT_ENDPOINT: &str = "https://api.odysee.live/livestream/all";

/// Configuration for [`LivestreamClient`](crate::LivestreamClient).
#[derive(Debug, Clone)]
pub struct LiveApiConfig {
    /// Endpoint returning the status of all active livestreams
    pub endpoint: Url,
    /// HTTP request timeout for the status fetch
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
}

impl Default for LiveApiConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            request_timeout: Duration::from_secs(30),
            user_agent: "odysee-live/0.1.0",
        }
    }
}

impl LiveApiConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// `ODYSEE_LIVE_ENDPOINT` replaces the endpoint when it parses as a URL,
    /// and `ODYSEE_LIVE_TIMEOUT_SECS` replaces the request timeout.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = std::env::var("ODYSEE_LIVE_ENDPOINT") {
            if let Ok(url) = Url::parse(&endpoint) {
                config.endpoint = url;
            }
        }

        if let Ok(timeout) = std::env::var("ODYSEE_LIVE_TIMEOUT_SECS") {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.request_timeout = Duration::from_secs(seconds);
            }
        }

        config
    }

    /// Replaces the endpoint, typically with a mock server URL in tests.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = LiveApiConfig::default();

        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.user_agent, "odysee-live/0.1.0");
    }

    // Single test so the env mutations never race each other.
    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("ODYSEE_LIVE_ENDPOINT", "http://localhost:9099/all");
            std::env::set_var("ODYSEE_LIVE_TIMEOUT_SECS", "5");
        }

        let config = LiveApiConfig::from_env();

        assert_eq!(config.endpoint.as_str(), "http://localhost:9099/all");
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        // Unparseable overrides fall back to the defaults
        unsafe {
            std::env::set_var("ODYSEE_LIVE_ENDPOINT", "not a url");
            std::env::set_var("ODYSEE_LIVE_TIMEOUT_SECS", "soon");
        }

        let config = LiveApiConfig::from_env();

        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, Duration::from_secs(30));

        // Cleanup
        unsafe {
            std::env::remove_var("ODYSEE_LIVE_ENDPOINT");
            std::env::remove_var("ODYSEE_LIVE_TIMEOUT_SECS");
        }
    }
}

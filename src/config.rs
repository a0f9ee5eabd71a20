//! Client configuration
//!
//! ## Table of Contents
//! - **ClientConfig**: Explicit configuration passed at client construction
//! - **FLYDEALS_API_ENV**: Environment variable for the API base URL

use std::time::Duration;

/// Environment variable holding the FlyDeals API base URL
pub const FLYDEALS_API_ENV: &str = "FLYDEALS_API";

/// Default API base URL when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`DealsClient`](crate::DealsClient).
///
/// Construction is explicit: the base URL is resolved once when the config is
/// built, never read from the environment at call time. [`ClientConfig::from_env`]
/// exists for callers that want environment-driven setup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL; requests are issued relative to it
    pub base_url: String,
    /// Timeout applied to every request
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a config with an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Resolve the base URL from `FLYDEALS_API`, falling back to
    /// [`DEFAULT_BASE_URL`] when unset
    pub fn from_env() -> Self {
        match std::env::var(FLYDEALS_API_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with any trailing slash stripped
    pub(crate) fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_is_stripped_once() {
        let config = ClientConfig::new("https://api.flydeals.example/");
        assert_eq!(
            config.normalized_base_url(),
            "https://api.flydeals.example"
        );
    }

    #[test]
    fn builder_overrides_timeout() {
        let config = ClientConfig::new("http://127.0.0.1:9999")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}

//! Client configuration with sensible defaults.
//!
//! [`SearchConfig`] controls where the search service lives and how long
//! requests may take. The defaults match the service's development
//! deployment.

use url::Url;

use crate::error::SearchError;

/// Default base URL of the search service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration for the search client.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the search service. The request path is appended.
    pub base_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, a crate-versioned default
    /// is used.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an absolute URL
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if Url::parse(&self.base_url).is_err() {
            return Err(SearchError::Config(format!(
                "base_url '{}' is not a valid URL",
                self.base_url
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_base_url_rejected() {
        let config = SearchConfig {
            base_url: "not a url".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn empty_base_url_rejected() {
        let config = SearchConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn custom_user_agent_accepted() {
        let config = SearchConfig {
            user_agent: Some("custom-agent/1.0".into()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}

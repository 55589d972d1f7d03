use crate::utils::error::{OnfleetError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://onfleet.com/api/v2/";

const ENV_API_KEY: &str = "ONFLEET_API_KEY";
const ENV_BASE_URL: &str = "ONFLEET_BASE_URL";
const ENV_TIMEOUT_SECONDS: &str = "ONFLEET_TIMEOUT_SECONDS";

/// Client configuration: the API key plus optional overrides.
///
/// The API key doubles as the Basic-Auth username (empty password), per
/// Onfleet's authentication scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout_seconds: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Read configuration from `ONFLEET_API_KEY`, `ONFLEET_BASE_URL` and
    /// `ONFLEET_TIMEOUT_SECONDS`. Only the API key is required.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| OnfleetError::MissingConfigError {
            field: ENV_API_KEY.to_string(),
        })?;
        let base_url = std::env::var(ENV_BASE_URL).ok();
        let timeout_seconds = match std::env::var(ENV_TIMEOUT_SECONDS) {
            Ok(raw) => Some(raw.parse().map_err(|_| {
                OnfleetError::InvalidConfigValueError {
                    field: ENV_TIMEOUT_SECONDS.to_string(),
                    value: raw.clone(),
                    reason: "Value must be a positive integer".to_string(),
                }
            })?),
            Err(_) => None,
        };

        let config = Self {
            api_key,
            base_url,
            timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Effective base URL, normalized to end with a slash so relative
    /// resource paths join under it instead of replacing its last segment.
    pub fn resolved_base_url(&self) -> String {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;

        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, 300)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_used() {
        let config = ClientConfig::new("key");
        assert_eq!(config.resolved_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_override_gains_trailing_slash() {
        let config = ClientConfig::new("key").with_base_url("http://localhost:8080/api/v2");
        assert_eq!(config.resolved_base_url(), "http://localhost:8080/api/v2/");
    }

    #[test]
    fn test_validate_rejects_empty_api_key() {
        assert!(ClientConfig::new("").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = ClientConfig::new("key").with_base_url("not-a-url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_timeout() {
        assert!(ClientConfig::new("key").with_timeout(0).validate().is_err());
        assert!(ClientConfig::new("key").with_timeout(30).validate().is_ok());
    }
}

//! Client configuration

use crate::{HyperwalletError, Result};
use std::env;
use std::time::Duration;

/// Sandbox base URL of the REST API v3
pub const DEFAULT_BASE_URL: &str = "https://api.sandbox.hyperwallet.com/rest/v3";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable holding the program token
pub const ENV_PROGRAM_TOKEN: &str = "PROGRAM_TOKEN";
/// Environment variable holding the API user name
pub const ENV_USER_NAME: &str = "API_USER_NAME";
/// Environment variable holding the API password
pub const ENV_PASSWORD: &str = "API_PASSWORD";
/// Optional environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "API_BASE_URL";

/// Connection settings for the Hyperwallet API
#[derive(Clone)]
pub struct HyperwalletConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Program token of the account
    pub program_token: String,
    /// Basic auth user name
    pub username: String,
    /// Basic auth password
    pub password: String,
    /// Request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for HyperwalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperwalletConfig")
            .field("base_url", &self.base_url)
            .field("program_token", &self.program_token)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HyperwalletConfig {
    /// Create a config for the sandbox with the given credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            program_token: String::new(),
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load the config from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let username = env::var(ENV_USER_NAME).unwrap_or_default();
        let password = env::var(ENV_PASSWORD).unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            return Err(HyperwalletError::config(format!(
                "Missing credentials: {} and {} must be set",
                ENV_USER_NAME, ENV_PASSWORD
            )));
        }

        let mut config = Self::new(username, password)
            .with_program_token(env::var(ENV_PROGRAM_TOKEN).unwrap_or_default());

        if let Ok(base_url) = env::var(ENV_BASE_URL) {
            if !base_url.is_empty() {
                config = config.with_base_url(base_url);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(HyperwalletError::config(
                "API user name and password cannot be empty",
            ));
        }

        let url = url::Url::parse(&self.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(HyperwalletError::config(
                "Base URL must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(HyperwalletError::config("Timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the program token
    pub fn with_program_token(mut self, program_token: impl Into<String>) -> Self {
        self.program_token = program_token.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = HyperwalletConfig::new("user", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.program_token.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder_trims_trailing_slash() {
        let config = HyperwalletConfig::new("user", "secret")
            .with_base_url("http://localhost:8080/rest/v3/")
            .with_program_token("prg-123")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:8080/rest/v3");
        assert_eq!(config.program_token, "prg-123");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_rejects_empty_credentials() {
        let config = HyperwalletConfig::new("", "secret");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, HyperwalletError::Config(_)));
    }

    #[test]
    fn test_config_rejects_bad_urls() {
        let config = HyperwalletConfig::new("user", "secret").with_base_url("not a url");
        assert!(matches!(
            config.validate().unwrap_err(),
            HyperwalletError::InvalidUrl(_)
        ));

        let config = HyperwalletConfig::new("user", "secret").with_base_url("ftp://example.com");
        assert!(matches!(
            config.validate().unwrap_err(),
            HyperwalletError::Config(_)
        ));
    }

    #[test]
    fn test_config_rejects_zero_timeout() {
        let config = HyperwalletConfig::new("user", "secret").with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = HyperwalletConfig::new("user", "top-secret");
        let debug = format!("{:?}", config);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("top-secret"));
    }
}

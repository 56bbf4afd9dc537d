//! Browser configuration.
//!
//! The only required value is the API credential. Everything else has a
//! default that points at the public API.

use std::fmt;
use std::time::Duration;

use catalog::DEFAULT_IMAGE_BASE_URL;
use query::{ApiKey, DEFAULT_LANGUAGE};
use thiserror::Error;
use tmdb_client::DEFAULT_API_BASE_URL;

/// Configuration problems detected when the controller is built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No credential, or one that is only whitespace
    #[error("API key is missing. Set TMDB_API_KEY (or pass --api-key) to browse movies.")]
    MissingApiKey,
}

/// Everything the controller needs to know before it can fetch.
#[derive(Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub image_base_url: String,
    /// Locale sent with every request
    pub language: String,
    /// Delay between a query change and the request going out
    pub debounce: Duration,
}

impl BrowserConfig {
    /// Configuration with default endpoints and the given credential
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            debounce: Duration::ZERO,
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// The validated credential.
    ///
    /// # Errors
    /// `ConfigError::MissingApiKey` when the key is absent or blank
    pub fn api_key(&self) -> Result<ApiKey, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(ApiKey::new)
            .ok_or(ConfigError::MissingApiKey)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for BrowserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("api_base_url", &self.api_base_url)
            .field("image_base_url", &self.image_base_url)
            .field("language", &self.language)
            .field("debounce", &self.debounce)
            .finish()
    }
}

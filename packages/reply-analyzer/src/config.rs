//! Process configuration, resolved once at startup.

use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::settings::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
///
/// The API key is optional here; its absence surfaces as a configuration
/// error on the first analysis attempt.
#[derive(Debug)]
pub struct Config {
    pub openai_api_key: Option<SecretString>,
    pub openai_base_url: String,
    pub default_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: openai_client::DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, honouring a `.env` file.
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();
        Self {
            openai_api_key: var("OPENAI_API_KEY").map(SecretString::from),
            openai_base_url: var("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            default_model: var("REPLY_MODEL").unwrap_or(defaults.default_model),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.openai_api_key = Some(SecretString::from(api_key.into()));
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Client for the configured endpoint, if a key is present.
    pub fn openai_client(&self) -> Option<openai_client::OpenAIClient> {
        self.openai_api_key.as_ref().map(|key| {
            openai_client::OpenAIClient::new(key.expose_secret())
                .with_base_url(self.openai_base_url.as_str())
        })
    }
}

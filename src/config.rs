//! Client configuration.
//!
//! Everything an invocation needs is fixed up front: the credential from
//! the environment, the canonical site origin, the API base, and whether
//! created articles go live immediately or stay drafts.

use std::env;

/// Environment variable holding the dev.to API key.
pub const API_KEY_ENV: &str = "DEV_TO_API_KEY";

/// Canonical origin of the source blog.
pub const DEFAULT_SITE_URL: &str = "https://www.maxivanov.io";

/// Base URL of the Forem articles API.
pub const DEFAULT_API_URL: &str = "https://dev.to/api";

/// Configuration for a [`DevToClient`](crate::DevToClient).
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential sent in the `api-key` header. Deliberately not
    /// validated locally: an absent or wrong key is rejected by the
    /// remote API, not by this client.
    pub api_key: String,
    /// Canonical site origin used for link rewriting, canonical URLs and
    /// the promotional footer. No trailing slash.
    pub site_url: String,
    /// Base URL of the articles API. No trailing slash.
    pub api_url: String,
    /// Whether created articles are published immediately. A fixed
    /// choice of the invocation, never derived from the document.
    pub auto_publish: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            site_url: DEFAULT_SITE_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            auto_publish: false,
        }
    }
}

impl Config {
    /// Builds a configuration with the API key read from
    /// [`API_KEY_ENV`] and defaults for everything else.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Sets the canonical site origin.
    pub fn site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = trim_origin(url.into());
        self
    }

    /// Sets the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = trim_origin(url.into());
        self
    }

    /// Sets whether articles are published immediately instead of being
    /// created as drafts.
    pub fn auto_publish(mut self, publish: bool) -> Self {
        self.auto_publish = publish;
        self
    }
}

fn trim_origin(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

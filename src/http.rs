//! HTTP transport for the Forem articles API.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DevToError, Result};

/// Header name carrying the platform credential.
const API_KEY_HEADER: &str = "api-key";

const USER_AGENT: &str = concat!("devto-pub-rs/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around [`reqwest::Client`] that scopes requests to the
/// API base and attaches the credential header to every call.
#[derive(Debug)]
pub struct DevToHttpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DevToHttpClient {
    /// Creates a client for `base_url`, e.g. `https://dev.to/api`.
    ///
    /// The key is attached as-is; an empty key is sent and rejected by
    /// the remote side rather than validated here.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(DevToError::config_error("API base URL must not be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// POSTs a JSON body to `path` (relative to the API base).
    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<reqwest::Response> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// PUTs a JSON body to `path`.
    pub async fn put_json<T: Serialize>(&self, path: &str, body: &T) -> Result<reqwest::Response> {
        let url = self.url(path);
        debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    /// GETs `path`.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;
        Ok(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// A decoded API response: either the expected payload or the platform's
/// error shape (`{ "error": "...", "status": 422 }`).
///
/// The API reports business errors in the response body, so a decoded
/// body must go through [`ApiResponse::into_result`] before its fields
/// are used; this keeps callers from treating an error body as a
/// success.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Failure(ApiFailure),
    Success(T),
}

/// Error body returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFailure {
    pub error: String,
    #[serde(default)]
    pub status: u16,
}

impl<T> ApiResponse<T> {
    /// Converts the response into a `Result`, surfacing the platform's
    /// error message as [`DevToError::Api`].
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Failure(failure) => Err(DevToError::Api {
                status: failure.status,
                message: failure.error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::PublishedArticle;
    use serde_json::json;

    #[test]
    fn test_success_body_decodes_as_success() {
        let body = json!({
            "id": 1,
            "title": "T",
            "url": "https://dev.to/x/t-abc",
            "slug": "t-abc"
        });

        let response: ApiResponse<PublishedArticle> = serde_json::from_value(body).unwrap();
        let article = response.into_result().unwrap();
        assert_eq!(article.url, "https://dev.to/x/t-abc");
    }

    #[test]
    fn test_error_body_decodes_as_failure() {
        let body = json!({
            "error": "Canonical url has already been taken",
            "status": 422
        });

        let response: ApiResponse<PublishedArticle> = serde_json::from_value(body).unwrap();
        let err = response.into_result().unwrap_err();
        assert!(matches!(
            err,
            DevToError::Api { status: 422, ref message }
                if message == "Canonical url has already been taken"
        ));
    }

    #[test]
    fn test_error_body_without_status_defaults_to_zero() {
        let body = json!({ "error": "unauthorized" });
        let response: ApiResponse<PublishedArticle> = serde_json::from_value(body).unwrap();
        assert!(matches!(
            response.into_result().unwrap_err(),
            DevToError::Api { status: 0, .. }
        ));
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(matches!(
            DevToHttpClient::new("", "key").unwrap_err(),
            DevToError::Config { .. }
        ));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = DevToHttpClient::new("https://dev.to/api/", "key").unwrap();
        assert_eq!(client.url("/articles"), "https://dev.to/api/articles");
    }
}

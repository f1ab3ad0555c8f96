//! PokéAPI HTTP adapter (reqwest)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, ApiPath, RawApiPort};

/// Default public PokéAPI base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// HTTP adapter implementing [`RawApiPort`] over reqwest.
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: Url,
}

impl ApiAdapter {
    /// Create an adapter with no request timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, None)
    }

    /// Create an adapter with an optional per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::RequestFailed(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a relative path against the base, percent-encoding each segment.
    pub fn endpoint(&self, path: &ApiPath) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?;
            segments.pop_if_empty();
            segments.extend(path.segments());
        }
        if !path.query_pairs().is_empty() {
            url.query_pairs_mut().extend_pairs(path.query_pairs());
        }
        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<Value, ApiError> {
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(url = %url, status = status.as_u16(), "Non-success response");
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &ApiPath) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;
        self.fetch(url).await
    }

    async fn get_json_url(&self, url: &str) -> Result<Value, ApiError> {
        let url = Url::parse(url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", url, e)))?;
        self.fetch(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments_to_base_path() {
        let api = ApiAdapter::new("https://pokeapi.co/api/v2/").unwrap();
        let url = api
            .endpoint(&ApiPath::new().segment("pokemon").segment("pikachu"))
            .unwrap();
        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/pikachu");
    }

    #[test]
    fn endpoint_encodes_user_input() {
        let api = ApiAdapter::new("https://pokeapi.co/api/v2").unwrap();
        let url = api
            .endpoint(&ApiPath::new().segment("pokemon").segment("mr mime/../x"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://pokeapi.co/api/v2/pokemon/mr%20mime%2F..%2Fx"
        );
    }

    #[test]
    fn configured_timeout_builds_a_client() {
        let api = ApiAdapter::with_timeout(
            "https://pokeapi.co/api/v2",
            Some(Duration::from_secs(5)),
        );
        assert!(api.is_ok());
    }

    #[test]
    fn endpoint_adds_query() {
        let api = ApiAdapter::new("http://localhost:8000/api/v2").unwrap();
        let url = api
            .endpoint(
                &ApiPath::new()
                    .segment("pokemon")
                    .query("limit", 18)
                    .query("offset", 0),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/v2/pokemon?limit=18&offset=0"
        );
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(ApiAdapter::new("not a url").is_err());
        assert!(ApiAdapter::new("mailto:someone@example.com").is_err());
    }
}

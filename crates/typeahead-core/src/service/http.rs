//! HTTP implementation of [`SearchService`].
//!
//! Wraps a reqwest client with:
//! - endpoint URLs resolved against one base URL
//! - a default request timeout and user agent
//! - non-2xx statuses mapped to [`TypeaheadError::Http`]

use super::SearchService;
use crate::config::NetworkConfig;
use crate::error::{Result, TypeaheadError};
use crate::models::{CacheStats, PopularQueries, SearchRequest, SearchResponse};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the remote search service.
#[derive(Debug, Clone)]
pub struct HttpSearchService {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpSearchService {
    /// Create a client for the service rooted at `base_url`
    /// (e.g. `http://127.0.0.1:8080/api`).
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, NetworkConfig::REQUEST_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| TypeaheadError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self {
            client,
            base_url: normalize_base(base_url)?,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path (and optional query string) against the base.
    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error("GET", &url, e))?;
        self.decode("GET", &url, check_status(response, &url)?).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &Url,
        response: Response,
    ) -> Result<T> {
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(method, url, e))?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Map a reqwest failure; timeouts report the timeout this client was
    /// built with.
    fn transport_error(&self, method: &str, url: &Url, err: reqwest::Error) -> TypeaheadError {
        if err.is_timeout() {
            return TypeaheadError::Timeout(self.timeout);
        }
        TypeaheadError::Network {
            message: format!("{} {} failed: {}", method, url, err),
            cause: std::error::Error::source(&err).map(|s| s.to_string()),
        }
    }
}

#[async_trait]
impl SearchService for HttpSearchService {
    async fn autocomplete(&self, query: &str) -> Result<Vec<String>> {
        let url = self.endpoint(&format!(
            "autocomplete?query={}",
            urlencoding::encode(query)
        ))?;
        self.get_json(url).await
    }

    async fn search(&self, query: &str) -> Result<SearchResponse> {
        let url = self.endpoint("search")?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .json(&SearchRequest {
                query: query.to_string(),
            })
            .send()
            .await
            .map_err(|e| self.transport_error("POST", &url, e))?;

        self.decode("POST", &url, check_status(response, &url)?).await
    }

    async fn popular(&self, limit: usize) -> Result<PopularQueries> {
        let url = self.endpoint(&format!("popular?limit={}", limit))?;
        self.get_json(url).await
    }

    async fn cache_stats(&self) -> Result<CacheStats> {
        let url = self.endpoint("stats/cache")?;
        self.get_json(url).await
    }
}

/// Parse the base URL and make sure relative joins append to its path.
fn normalize_base(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim())?;
    if url.cannot_be_a_base() {
        return Err(TypeaheadError::InvalidUrl(format!(
            "{} cannot be used as a base URL",
            base_url
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn check_status(response: Response, url: &Url) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(TypeaheadError::Http {
        status: status.as_u16(),
        url: url.to_string(),
    })
}

// GitHub API HTTP client.
// Fetches a URL and returns its body as parsed JSON.

use async_trait::async_trait;
use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{Error, FetchError, Result};

/// Source of JSON documents addressed by URL.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// GET `url` and parse the response body as JSON.
    async fn fetch(&self, url: &str) -> std::result::Result<Value, FetchError>;
}

/// [`JsonFetcher`] backed by a reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher using the headers and timeout from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_str(&config.api_version)
                .map_err(|e| Error::Config(format!("api_version: {}", e)))?,
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Config(format!("user_agent: {}", e)))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Http)?;

        Ok(Self { client })
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> std::result::Result<Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        match status {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound(response.url().to_string())),
            status => Err(FetchError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> std::result::Result<Value, FetchError> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let response = Self::check_response(response).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

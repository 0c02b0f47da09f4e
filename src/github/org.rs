// Organization client.
// Derives an organization's repository listing from its metadata payload.

use serde_json::Value;

use crate::cache::Memoized;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::nested::{access_nested_map, access_nested_str};

use super::client::{HttpFetcher, JsonFetcher};
use super::endpoints::org_url;

/// Client for one GitHub organization.
///
/// The organization payload is fetched once per client and cached;
/// repository listings are fetched again on every call.
pub struct OrgClient<F = HttpFetcher> {
    org_name: String,
    fetcher: F,
    org: Memoized<Value>,
}

impl OrgClient<HttpFetcher> {
    /// Create a client that talks to the GitHub API over HTTP.
    pub fn new(org_name: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_fetcher(org_name, HttpFetcher::new(config)?))
    }
}

impl<F: JsonFetcher> OrgClient<F> {
    /// Create a client that reads payloads through `fetcher`.
    pub fn with_fetcher(org_name: impl Into<String>, fetcher: F) -> Self {
        Self {
            org_name: org_name.into(),
            fetcher,
            org: Memoized::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Organization metadata, fetched on first access.
    pub async fn org(&mut self) -> Result<&Value> {
        let org_name = self.org_name.as_str();
        let fetcher = &self.fetcher;

        self.org
            .get_or_try_init_async(move || async move {
                let url = org_url(org_name);
                tracing::debug!(org = org_name, url = %url, "fetching organization");
                fetcher.fetch(&url).await.map_err(Error::from)
            })
            .await
    }

    /// The `repos_url` field of the organization payload.
    pub async fn public_repos_url(&mut self) -> Result<&str> {
        let org = self.org().await?;
        access_nested_str(org, &["repos_url"])
    }

    /// Raw repository listing for the organization.
    pub async fn repos_payload(&mut self) -> Result<Value> {
        let url = self.public_repos_url().await?.to_owned();
        tracing::debug!(org = %self.org_name, url = %url, "fetching repositories");
        Ok(self.fetcher.fetch(&url).await?)
    }

    /// Names of the organization's public repositories, in listing order.
    ///
    /// With `license`, only repositories whose `license.key` equals it
    /// exactly are returned.
    pub async fn public_repos(&mut self, license: Option<&str>) -> Result<Vec<String>> {
        let payload = self.repos_payload().await?;
        let repos = payload.as_array().ok_or_else(|| Error::UnexpectedType {
            key: "repos".to_string(),
            expected: "array",
        })?;

        repos
            .iter()
            .filter(|repo| license.is_none_or(|key| Self::has_license(repo, key)))
            .map(|repo| access_nested_str(repo, &["name"]).map(str::to_owned))
            .collect()
    }

    /// Whether `repo` declares the license `license_key`.
    /// Missing or malformed license data counts as no license.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        access_nested_map(repo, &["license", "key"])
            .is_ok_and(|key| key.as_str() == Some(license_key))
    }
}

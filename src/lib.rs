// orgscope: list a GitHub organization's public repositories.
// Organization metadata is fetched once per client; listings can be filtered by license key.

pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod nested;

pub use cache::Memoized;
pub use config::ClientConfig;
pub use error::{Error, FetchError, Result};
pub use github::{HttpFetcher, JsonFetcher, ORG_URL, OrgClient, org_url};
pub use nested::{access_nested_map, access_nested_str};

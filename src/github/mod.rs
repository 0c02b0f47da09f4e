// GitHub API module.
// Provides the JSON fetcher and the organization client built on it.

pub mod client;
pub mod endpoints;
pub mod org;

pub use client::{HttpFetcher, JsonFetcher};
pub use endpoints::{ORG_URL, org_url};
pub use org::OrgClient;

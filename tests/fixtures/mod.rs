//! Shared payloads and a URL-routing fetcher for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use orgscope::{FetchError, JsonFetcher};
use serde_json::{Value, json};
use std::sync::Mutex;

pub const REPOS_URL: &str = "https://api.github.com/orgs/google/repos";

/// Organization payload pointing at [`REPOS_URL`]
pub fn org_payload() -> Value {
    json!({
        "login": "google",
        "id": 1342004,
        "url": "https://api.github.com/orgs/google",
        "repos_url": REPOS_URL,
        "description": "Google ❤️ Open Source",
        "public_repos": 9,
    })
}

/// Repository listing mixing licensed and unlicensed repositories
pub fn repos_payload() -> Value {
    json!([
        {"id": 7697149, "name": "episodes.dart", "license": {"key": "bsd-3-clause", "name": "BSD 3-Clause \"New\" or \"Revised\" License"}},
        {"id": 7776515, "name": "cpp-netlib", "license": {"key": "bsl-1.0", "name": "Boost Software License 1.0"}},
        {"id": 7968417, "name": "dagger", "license": {"key": "apache-2.0", "name": "Apache License 2.0"}},
        {"id": 8165161, "name": "ios-webkit-debug-proxy", "license": {"key": "other", "name": "Other"}},
        {"id": 8459994, "name": "google.github.io", "license": null},
        {"id": 8566972, "name": "kratu", "license": {"key": "apache-2.0", "name": "Apache License 2.0"}},
        {"id": 8858648, "name": "build-debian-cloud", "license": {"key": "other", "name": "Other"}},
        {"id": 9060347, "name": "traceur-compiler", "license": {"key": "apache-2.0", "name": "Apache License 2.0"}},
        {"id": 9065917, "name": "firmata.py"},
    ])
}

pub fn expected_repos() -> Vec<&'static str> {
    vec![
        "episodes.dart",
        "cpp-netlib",
        "dagger",
        "ios-webkit-debug-proxy",
        "google.github.io",
        "kratu",
        "build-debian-cloud",
        "traceur-compiler",
        "firmata.py",
    ]
}

pub fn apache2_repos() -> Vec<&'static str> {
    vec!["dagger", "kratu", "traceur-compiler"]
}

/// Serves the repository listing for the org's `repos_url` and the
/// organization payload for every other URL
pub struct RoutingFetcher {
    org: Value,
    repos: Value,
    calls: Mutex<Vec<String>>,
}

impl RoutingFetcher {
    pub fn new(org: Value, repos: Value) -> Self {
        Self {
            org,
            repos,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonFetcher for RoutingFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        if self.org.get("repos_url").and_then(Value::as_str) == Some(url) {
            Ok(self.repos.clone())
        } else {
            Ok(self.org.clone())
        }
    }
}

// GitHub API endpoint URLs.

/// Organization metadata endpoint; `{org}` is replaced by the organization login.
pub const ORG_URL: &str = "https://api.github.com/orgs/{org}";

/// Organization metadata URL for `org`.
pub fn org_url(org: &str) -> String {
    ORG_URL.replace("{org}", org)
}

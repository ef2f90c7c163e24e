//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no process environment, so the backend base URL is baked
//! in at compile time from `STOCKLIVE_API_BASE_URL`, falling back to the local
//! development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when no base URL was provided at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Staleness window for portfolio responses (5 minutes).
pub const PORTFOLIO_STALE_MS: u64 = 5 * 60 * 1000;

/// Staleness window for content lists; zero means always revalidate.
pub const CONTENT_STALE_MS: u64 = 0;

/// Where the Request Layer sends its calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL. Trailing slashes are dropped and an
    /// empty value selects [`DEFAULT_API_BASE_URL`].
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config from the compile-time environment.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("STOCKLIVE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL with exactly one `/` between them.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

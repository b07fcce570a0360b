//! Client configuration
//!
//! Everything the dispatcher needs to reach an account: host, credentials,
//! per-request timeout, and the pagination page guard. Built once and passed
//! into [`crate::client::Client`] at construction, so multiple clients with
//! different accounts can coexist in one process.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::time::Duration;

/// Default per-request timeout (30 000 ms)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default upper bound on requests issued by a single paginated call
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Configuration for a [`crate::client::Client`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Account hostname, e.g. `example.atlassian.net`. A value that already
    /// carries an `http://` or `https://` scheme is used verbatim.
    pub account: String,
    /// Basic-auth username
    pub username: String,
    /// Basic-auth password
    pub password: String,
    /// Per-request timeout enforced by the transport
    pub timeout: Duration,
    /// Upper bound on requests per paginated call
    pub max_pages: u32,
}

impl ClientConfig {
    /// Create a config with default timeout and page guard
    pub fn new(
        account: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            username: username.into(),
            password: password.into(),
            timeout: DEFAULT_TIMEOUT,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the pagination page guard
    #[must_use]
    pub fn max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Base URL for all requests: `https://<account>/rest/api/latest`
    pub fn base_url(&self) -> String {
        let account = self.account.trim_end_matches('/');
        if account.starts_with("http://") || account.starts_with("https://") {
            format!("{account}{}", crate::client::API_PREFIX)
        } else {
            format!("https://{account}{}", crate::client::API_PREFIX)
        }
    }

    /// Basic-auth header value: `Basic base64(username:password)`
    pub fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(credentials))
    }
}

//! Transport collaborator
//!
//! The pluggable HTTP layer behind the dispatcher. The [`Transport`] trait
//! exposes single-shot `get`/`post` operations; [`ReqwestTransport`] is the
//! built-in implementation. Tests substitute a scripted double that returns
//! canned [`TransportResponse`]/[`TransportError`] values without network
//! I/O.

mod client;

pub use client::ReqwestTransport;

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;


/// Per-request options handed to the transport
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Request timeout
    pub timeout: Duration,
    /// Request headers
    pub headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Create options with the given timeout and no headers
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            headers: HashMap::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// A completed HTTP round trip
///
/// Header names are stored lowercase.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
    /// Response headers, names lowercased
    pub headers: HashMap<String, String>,
}

impl TransportResponse {
    /// The `content-type` header value, or `""` when absent
    pub fn content_type(&self) -> &str {
        self.headers.get("content-type").map_or("", String::as_str)
    }
}

/// A transport-level failure (connection refused, DNS, timeout, ...)
#[derive(Debug, Clone)]
pub struct TransportError {
    /// Human-readable failure description
    pub message: String,
}

impl TransportError {
    /// Create an error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Outcome of a single transport round trip
pub type TransportResult = std::result::Result<TransportResponse, TransportError>;

/// Pluggable HTTP transport with single-shot `get`/`post`
///
/// Implementations perform exactly one round trip per call; retry policy is
/// deliberately out of scope. The `Debug` bound identifies the selected
/// transport in the dispatch trace.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Perform a GET request
    async fn get(&self, url: &str, options: RequestOptions) -> TransportResult;

    /// Perform a POST request with the given body
    async fn post(&self, url: &str, options: RequestOptions, body: String) -> TransportResult;
}

//! Built-in reqwest transport
//!
//! Single-shot dispatch only: one call, one round trip, any reqwest error
//! mapped to a [`TransportError`] carrying the error's message.

use super::{RequestOptions, Transport, TransportError, TransportResponse, TransportResult};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::collections::HashMap;

/// Default [`Transport`] implementation backed by [`reqwest::Client`]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new transport
    pub fn new() -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }

    async fn dispatch(&self, mut req: RequestBuilder, options: RequestOptions) -> TransportResult {
        req = req.timeout(options.timeout);
        for (key, value) in &options.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        match req.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let headers: HashMap<String, String> = response
                    .headers()
                    .iter()
                    .map(|(name, value)| {
                        (
                            name.as_str().to_ascii_lowercase(),
                            value.to_str().unwrap_or("").to_string(),
                        )
                    })
                    .collect();
                let body = response
                    .text()
                    .await
                    .map_err(|e| TransportError::new(e.to_string()))?;
                Ok(TransportResponse {
                    status,
                    body,
                    headers,
                })
            }
            Err(e) => Err(TransportError::new(e.to_string())),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, options: RequestOptions) -> TransportResult {
        self.dispatch(self.client.get(url), options).await
    }

    async fn post(&self, url: &str, options: RequestOptions, body: String) -> TransportResult {
        self.dispatch(self.client.post(url).body(body), options)
            .await
    }
}

//! Request dispatcher and pagination driver
//!
//! [`Client`] is the public entry point. `request`/`get`/`post` perform a
//! single authenticated round trip and normalize the outcome; `get_all`
//! drives the paginating request engine, re-issuing requests until the
//! accumulator covers the server-reported `total`.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::pagination::{next_page_query, PageEnvelope};
use crate::transport::{ReqwestTransport, RequestOptions, Transport, TransportResult};
use crate::types::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;


/// Path prefix appended to the account host for every request
pub const API_PREFIX: &str = "/rest/api/latest";

/// The only content-type accepted on a 200 response
const CONTENT_TYPE_JSON: &str = "application/json;charset=UTF-8";

/// Issue-tracker REST client
///
/// Holds read-only configuration and a shared transport; each call operates
/// on its own locally-scoped state, so a `Client` can be shared freely.
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client using the built-in reqwest transport
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// The client's configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform a single authenticated request and normalize the response
    pub async fn request(
        &self,
        method: Method,
        resource_path: &str,
        query_params: &str,
        payload: &str,
    ) -> Result<Value> {
        let url = self.build_url(resource_path, query_params);
        debug!(%method, %url, transport = ?self.transport, "dispatching request");

        let options = RequestOptions::new(self.config.timeout)
            .header("Content-Type", "application/json")
            .header("Authorization", self.config.basic_auth());

        let outcome = match method {
            Method::Get => self.transport.get(&url, options).await,
            Method::Post => self.transport.post(&url, options, payload.to_string()).await,
        };

        normalize(outcome)
    }

    /// GET an endpoint known to return a single object
    pub async fn get(&self, resource_path: &str, query_params: &str) -> Result<Value> {
        self.request(Method::Get, resource_path, query_params, "")
            .await
    }

    /// POST a JSON payload
    pub async fn post(
        &self,
        resource_path: &str,
        query_params: &str,
        payload: &str,
    ) -> Result<Value> {
        self.request(Method::Post, resource_path, query_params, payload)
            .await
    }

    /// GET a paginated endpoint, aggregating every page into one sequence
    ///
    /// `resource_field_name` names the array field of the page envelope.
    /// Pages are fetched sequentially; items are appended in fetch order and
    /// never deduplicated. The first error anywhere in the chain returns
    /// immediately with no further requests. Stops once the accumulator
    /// reaches the server-reported `total` (`>=`, so an over-reporting
    /// server still terminates), or fails with
    /// [`Error::PageLimitExceeded`] after `max_pages` requests.
    pub async fn get_all(
        &self,
        resource_path: &str,
        resource_field_name: &str,
        query_params: &str,
    ) -> Result<Vec<Value>> {
        let mut accumulator: Vec<Value> = Vec::new();
        let mut current_query = query_params.to_string();
        let mut pages: u32 = 0;

        loop {
            if pages >= self.config.max_pages {
                return Err(Error::PageLimitExceeded {
                    max_pages: self.config.max_pages,
                });
            }

            let body = self
                .request(Method::Get, resource_path, &current_query, "")
                .await?;
            let envelope = PageEnvelope::from_value(&body, resource_field_name)?;
            accumulator.extend(envelope.items);
            pages += 1;

            if accumulator.len() as u64 >= envelope.total {
                return Ok(accumulator);
            }

            current_query = next_page_query(query_params, accumulator.len());
        }
    }

    fn build_url(&self, resource_path: &str, query_params: &str) -> String {
        format!(
            "{}{resource_path}?{query_params}",
            self.config.base_url()
        )
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("account", &self.config.account)
            .finish_non_exhaustive()
    }
}

/// Normalize a transport outcome into the crate result
///
/// Ordered chain, first match wins: transport failure, then 404, then
/// 200-with-JSON decode, then content-type rejection. The order is a tested
/// contract.
fn normalize(outcome: TransportResult) -> Result<Value> {
    let response = outcome.map_err(|e| Error::Transport { message: e.message })?;

    if response.status == 404 {
        return Err(Error::NotFound);
    }

    if response.status == 200 && response.content_type() == CONTENT_TYPE_JSON {
        return serde_json::from_str(&response.body).map_err(|e| Error::decode(e.to_string()));
    }

    Err(Error::unexpected_content_type(response.content_type()))
}

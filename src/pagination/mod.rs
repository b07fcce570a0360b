//! Page envelope parsing and query rewriting
//!
//! Paginated endpoints answer with an envelope: an integer `total` (item
//! count across all pages) plus a caller-named array holding this page's
//! items. [`PageEnvelope::from_value`] validates and extracts both;
//! [`next_page_query`] rewrites the caller's query string for the follow-up
//! request.

use crate::error::{Error, Result};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Page size requested on follow-up pages (`maxResults`)
pub const PAGE_SIZE: usize = 300;

/// A decoded paginated response body
#[derive(Debug, Clone)]
pub struct PageEnvelope {
    /// Total item count across all pages, as reported by the server
    pub total: u64,
    /// This page's items, in server order
    pub items: Vec<Value>,
}

impl PageEnvelope {
    /// Extract the envelope from a decoded body
    ///
    /// Fails with [`Error::MalformedEnvelope`] when `total` is missing or
    /// not a non-negative integer, or when `field` is missing or not an
    /// array.
    pub fn from_value(body: &Value, field: &str) -> Result<Self> {
        let total = body
            .get("total")
            .and_then(Value::as_u64)
            .ok_or_else(|| Error::malformed_envelope("missing integer `total` field"))?;

        let items = body
            .get(field)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed_envelope(format!("missing `{field}` items array")))?
            .clone();

        Ok(Self { total, items })
    }
}

/// Query string for the next page
///
/// `startAt` is the number of items already accumulated; the caller's
/// original query is preserved verbatim in the middle.
pub fn next_page_query(original: &str, fetched: usize) -> String {
    format!("startAt={fetched}&{original}&maxResults={PAGE_SIZE}")
}

//! # tracklet
//!
//! A minimal Rust client for Jira-style issue-tracking REST APIs.
//!
//! The crate issues authenticated HTTP requests, decodes JSON responses,
//! and transparently paginates collection-returning endpoints into a single
//! aggregated result.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tracklet::{Client, ClientConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::new("example.atlassian.net", "user", "secret");
//!     let client = Client::new(config);
//!
//!     // Single object
//!     let issue = client.get("/issue/PRJ-1", "").await?;
//!
//!     // Every page of a collection, aggregated
//!     let issues = client
//!         .get_all("/search", "issues", "jql=project%3DPRJ")
//!         .await?;
//!
//!     println!("{} issues, first: {issue}", issues.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller → Client::get_all ─┐
//!                           │ loops until accumulator >= total
//! caller → Client::request ─┴→ Transport (get/post) → normalize → Result
//! ```
//!
//! The transport is a trait, so tests (and embedders) can substitute a
//! scripted implementation with no network I/O. All calls are sequential;
//! a paginated call awaits each page before requesting the next.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Pluggable HTTP transport
pub mod transport;

/// Page envelope parsing and query rewriting
pub mod pagination;

/// Request dispatcher and pagination driver
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{PageEnvelope, PAGE_SIZE};
pub use transport::{
    ReqwestTransport, RequestOptions, Transport, TransportError, TransportResponse,
    TransportResult,
};
pub use types::Method;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

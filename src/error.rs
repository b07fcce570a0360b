//! Error types for the tracklet client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every error is terminal: the client never retries, falls back, or
//! suppresses — an error produced anywhere in a pagination chain surfaces
//! to the caller unchanged.

use thiserror::Error;

/// The main error type for the tracklet client
#[derive(Error, Debug)]
pub enum Error {
    /// Network/connection failure reported by the transport collaborator.
    /// The display string is the transport's message verbatim.
    #[error("{message}")]
    Transport { message: String },

    /// The server answered HTTP 404, regardless of body content.
    #[error("404 - Not Found")]
    NotFound,

    /// A 200 response carried the expected content-type but its body was
    /// not valid JSON.
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    /// The response carried a content-type other than
    /// `application/json;charset=UTF-8`.
    #[error("Invalid content-type returned: {content_type}")]
    UnexpectedContentType { content_type: String },

    /// A paginated response body was missing the integer `total` field or
    /// the named items array.
    #[error("Malformed page envelope: {message}")]
    MalformedEnvelope { message: String },

    /// The pagination driver issued `max_pages` requests without the
    /// accumulator reaching the server-reported total.
    #[error("Pagination aborted after {max_pages} pages without reaching the reported total")]
    PageLimitExceeded { max_pages: u32 },
}

impl Error {
    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an unexpected content-type error
    pub fn unexpected_content_type(content_type: impl Into<String>) -> Self {
        Self::UnexpectedContentType {
            content_type: content_type.into(),
        }
    }

    /// Create a malformed envelope error
    pub fn malformed_envelope(message: impl Into<String>) -> Self {
        Self::MalformedEnvelope {
            message: message.into(),
        }
    }
}

/// Result type alias for the tracklet client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");

        let err = Error::NotFound;
        assert_eq!(err.to_string(), "404 - Not Found");

        let err = Error::unexpected_content_type("text/html");
        assert_eq!(err.to_string(), "Invalid content-type returned: text/html");
    }

    #[test]
    fn test_decode_display_carries_reason() {
        let err = Error::decode("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Failed to decode response: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_page_limit_display() {
        let err = Error::PageLimitExceeded { max_pages: 1000 };
        assert_eq!(
            err.to_string(),
            "Pagination aborted after 1000 pages without reaching the reported total"
        );
    }
}

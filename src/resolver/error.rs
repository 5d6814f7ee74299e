//! Error types for the resolver module.

use thiserror::Error;

/// Errors from the remote image search and metadata lookups.
///
/// These are always caught by [`resolve_image`](super::resolve_image) and
/// turned into "no candidate" for the batch; they exist as a type so the
/// failure path is visible in the [`ImageSource`](super::ImageSource)
/// signatures rather than swallowed inside the client.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Network-level failure (DNS, connection refused, TLS, timeout).
    #[error("network error querying media repository for {query:?}: {source}")]
    Network {
        /// The search term or file title being looked up.
        query: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success HTTP status.
    #[error("media repository returned HTTP {status} for {query:?}")]
    HttpStatus {
        /// The search term or file title being looked up.
        query: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("unexpected media repository response for {query:?}: {source}")]
    Decode {
        /// The search term or file title being looked up.
        query: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    ClientBuild {
        /// The underlying builder error.
        #[source]
        source: reqwest::Error,
    },
}

impl ResolveError {
    /// Creates a network error for a query.
    pub fn network(query: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            query: query.into(),
            source,
        }
    }

    /// Creates an HTTP status error for a query.
    pub fn http_status(query: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            query: query.into(),
            status,
        }
    }

    /// Creates a decode error for a query.
    pub fn decode(query: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Decode {
            query: query.into(),
            source,
        }
    }
}

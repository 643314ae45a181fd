//! Fetch Error Taxonomy
//!
//! Every way a single fetch attempt can fail, as an explicit error kind.
//! These never escape the loader individually; the retry loop returns the
//! last one observed once all attempts are exhausted.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure: connection refused, DNS, request timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with something other than 200 OK.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body arrived but was not a JSON array.
    #[error("malformed response body: {0}")]
    Parse(#[source] serde_json::Error),
}

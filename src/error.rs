//! Error types shared by the ISBN sanitizer, marketplace client and extractor.

use thiserror::Error;

/// Errors produced while looking up sold listings for an ISBN.
#[derive(Error, Debug)]
pub enum PricerError {
    /// Nothing usable was left after sanitizing the input
    #[error("Invalid ISBN entered: '{0}'")]
    InvalidIsbn(String),

    /// The marketplace did not answer within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// The marketplace answered with a non-success status
    #[error("Request failed with status: {0}")]
    Status(u16),

    /// Transport-level failure (DNS, connection refused, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] wreq::Error),

    /// A listing block did not have the structure we expect
    #[error("Malformed listing: {0}")]
    MalformedListing(String),
}

impl PricerError {
    /// Returns true for the timeout case, which is reported separately from other fetch failures.
    pub fn is_timeout(&self) -> bool {
        matches!(self, PricerError::Timeout(_))
    }
}

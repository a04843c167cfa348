//! API Error Types
//!
//! HTTP 404 is not represented here: the data access layer recovers it
//! locally as a `None` sentinel. Every variant below surfaces as the
//! generic service failure at the orchestration boundary.

use thiserror::Error;

/// Data access error taxonomy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-success HTTP status other than 404
    #[error("HTTP {0}")]
    Http(u16),

    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("Invalid response body: {0}")]
    Parse(String),
}

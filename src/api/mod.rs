//! Data Access Layer
//!
//! One HTTP GET per data category against the SportSee backend, plus the
//! compiled-in mock source. Both paths run the raw payloads through the
//! formatters and hand back ready-to-render view shapes. A missing user
//! is a `None` sentinel, never an error.

pub mod client;
pub mod error;
pub mod mock;

pub use error::ApiError;

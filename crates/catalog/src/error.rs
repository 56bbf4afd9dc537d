//! Error types for the catalog crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - `#[from]` conversions so `?` works on serde_json results
//! - Error messages with context

use thiserror::Error;

/// Errors that can occur while reading movie payloads returned by the API
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The response body was not the JSON shape we expect
    #[error("Malformed movie payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A release date was present but not in `YYYY-MM-DD` form
    #[error("Invalid release date: {value:?}")]
    InvalidReleaseDate { value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;

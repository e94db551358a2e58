// File: crates/energy-api/src/error.rs
// Summary: Client error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by API calls.
///
/// Failures are reported to the user and the triggering action can simply
/// be repeated; the client itself never retries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Server(String),
}

//! Error types for the Gemini API client.

use thiserror::Error;

/// A single failed attempt against the API.
///
/// Transport failures and non-success HTTP statuses are deliberately one
/// type: the retry loop treats them identically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status. The message is the provider's structured
    /// error message when the body carried one, else a generic status line.
    #[error("{message}")]
    Status { status: u16, message: String },
}

/// All attempts failed; wraps the last attempt's error.
#[derive(Debug, Error)]
#[error("request failed after {attempts} attempts: {source}")]
pub struct RetryExhausted {
    pub attempts: u32,
    #[source]
    pub source: ApiError,
}

mod client;
mod error;
mod retry;

pub use client::{
    Candidate, ContentGenerator, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GenerateResponse,
};
pub use error::{ApiError, RetryExhausted};
pub use retry::{DEFAULT_MAX_RETRIES, fetch_with_retry};

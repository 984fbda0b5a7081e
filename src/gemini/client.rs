//! Client for the Gemini `generateContent` endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::error::ApiError;
use crate::prompt::ApiPayload;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";

// Use Cow so the payload strings are only borrowed for serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: Cow<'a, str>,
}

impl<'a> GenerateRequest<'a> {
    fn from_payload(payload: &'a ApiPayload) -> Self {
        Self {
            system_instruction: Content {
                parts: vec![RequestPart {
                    text: Cow::Borrowed(&payload.instruction),
                }],
            },
            contents: vec![Content {
                parts: vec![RequestPart {
                    text: Cow::Borrowed(&payload.body),
                }],
            }],
        }
    }
}

/// The response body, for both the success and the error shape.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl GenerateResponse {
    /// The first candidate's text, if the provider returned any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
    }
}

/// A single attempt against a content-generation API.
///
/// The seam between the orchestrator and the wire: production code uses
/// [`GeminiClient`], tests substitute an in-memory transport.
#[allow(async_fn_in_trait)]
pub trait ContentGenerator {
    async fn generate(&self, payload: &ApiPayload) -> Result<GenerateResponse, ApiError>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: String, model: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

impl ContentGenerator for GeminiClient {
    async fn generate(&self, payload: &ApiPayload) -> Result<GenerateResponse, ApiError> {
        let response = self
            .client
            .post(self.url())
            .json(&GenerateRequest::from_payload(payload))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the provider's structured error message when the body
            // parses; a malformed body falls back to the status line.
            let message = response
                .json::<GenerateResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .map_or_else(
                    || format!("HTTP error: {}", status.as_u16()),
                    |error| error.message,
                );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<GenerateResponse>().await?)
    }
}

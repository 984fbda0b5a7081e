//! Prompt construction for translation and proofreading requests.

use thiserror::Error;

/// The action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Translate,
    Proofread,
}

impl OperationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Proofread => "proofread",
        }
    }

    /// The in-progress label shown while this operation is running.
    pub const fn progress_label(self) -> &'static str {
        match self {
            Self::Translate => "Translating...",
            Self::Proofread => "Proofreading...",
        }
    }
}

pub const TRANSLATE_PROMPT_TEMPLATE: &str = "You are an expert translator. \
     Translate the following text from {source_language} to {target_language}. \
     Provide only the translated text, without any explanation, preamble, or \
     markdown formatting.";

pub const PROOFREAD_PROMPT_TEMPLATE: &str = "You are an expert proofreader and \
     editor. Correct the following {source_language} text for grammar, \
     spelling, punctuation, and clarity. Provide only the corrected text, \
     without any explanation, preamble, or markdown formatting.";

/// One submission, built fresh per user action and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub operation: OperationKind,
    /// Display name of the source language.
    pub source_language: String,
    /// Display name of the target language. Required only for translation.
    pub target_language: Option<String>,
    /// The raw input, trimmed on construction.
    pub input_text: String,
}

impl TranslationRequest {
    pub fn new(
        operation: OperationKind,
        source_language: impl Into<String>,
        target_language: Option<String>,
        input_text: &str,
    ) -> Self {
        Self {
            operation,
            source_language: source_language.into(),
            target_language,
            input_text: input_text.trim().to_string(),
        }
    }
}

/// Wire-shape request content: a system instruction plus the text to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPayload {
    pub instruction: String,
    pub body: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("input text is empty")]
    EmptyInput,
    #[error("target language is required for translation")]
    MissingTargetLanguage,
}

/// Builds the API payload for a request. Pure; no side effects.
///
/// # Errors
///
/// Fails when the trimmed input is empty, or when a translation request
/// carries no target language.
pub fn build_payload(request: &TranslationRequest) -> Result<ApiPayload, PromptError> {
    let body = request.input_text.trim();
    if body.is_empty() {
        return Err(PromptError::EmptyInput);
    }

    let instruction = match request.operation {
        OperationKind::Translate => {
            let target = request
                .target_language
                .as_deref()
                .ok_or(PromptError::MissingTargetLanguage)?;
            TRANSLATE_PROMPT_TEMPLATE
                .replace("{source_language}", &request.source_language)
                .replace("{target_language}", target)
        }
        OperationKind::Proofread => {
            PROOFREAD_PROMPT_TEMPLATE.replace("{source_language}", &request.source_language)
        }
    };

    Ok(ApiPayload {
        instruction,
        body: body.to_string(),
    })
}

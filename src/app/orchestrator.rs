//! Submission orchestration: validation, API call, and state transitions.

use anyhow::Result;

use super::state::{Severity, UiState};
use crate::gemini::{ContentGenerator, fetch_with_retry};
use crate::language::LanguagePair;
use crate::prompt::{OperationKind, TranslationRequest, build_payload};

pub const MISSING_KEY_MESSAGE: &str = "API key is missing. Set GEMINI_API_KEY or run 'glot configure'.";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to process.";
pub const NO_RESPONSE_MESSAGE: &str = "No valid response from API. Check your prompt or API key.";

/// How a submission ended. Every variant leaves the state idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Output was produced and published.
    Completed,
    /// Another submission was in flight; nothing changed.
    Busy,
    /// No API credential is configured.
    RejectedConfiguration,
    /// The input was empty after trimming.
    RejectedInput,
    /// The provider returned no usable result, or retries were exhausted.
    Failed,
}

/// Drives one submission at a time against a [`ContentGenerator`].
///
/// Owns the UI state and the language selection; `client` is `None` while no
/// credential is configured, which turns every submission into a
/// configuration rejection rather than a crash.
pub struct Orchestrator<C> {
    client: Option<C>,
    max_retries: u32,
    pub ui: UiState,
    pub languages: LanguagePair,
}

impl<C: ContentGenerator> Orchestrator<C> {
    pub fn new(client: Option<C>, max_retries: u32, languages: LanguagePair) -> Self {
        Self {
            client,
            max_retries,
            ui: UiState::new(),
            languages,
        }
    }

    pub fn swap_languages(&mut self) {
        self.languages.swap();
    }

    /// Runs one submission to completion.
    ///
    /// Failures surface as UI messages, never as silent drops; the busy flag
    /// is cleared on every path out of the in-flight section.
    ///
    /// # Errors
    ///
    /// Returns an error only for programmer-level faults (a selected
    /// language code missing from the registry).
    pub async fn submit(&mut self, operation: OperationKind, input: &str) -> Result<SubmitOutcome> {
        if self.ui.busy {
            return Ok(SubmitOutcome::Busy);
        }

        self.ui.clear_output();
        self.ui.clear_message();

        let Some(client) = &self.client else {
            self.ui.show_message(MISSING_KEY_MESSAGE, Severity::Danger);
            return Ok(SubmitOutcome::RejectedConfiguration);
        };

        let input = input.trim();
        if input.is_empty() {
            self.ui.show_message(EMPTY_INPUT_MESSAGE, Severity::Warning);
            return Ok(SubmitOutcome::RejectedInput);
        }

        let source_language = self.languages.source_name()?;
        let target_language = match operation {
            OperationKind::Translate => Some(self.languages.target_name()?.to_string()),
            OperationKind::Proofread => None,
        };

        let request = TranslationRequest::new(operation, source_language, target_language, input);
        let payload = build_payload(&request)?;

        self.ui.set_busy(true, Some(operation));
        let result = fetch_with_retry(self.max_retries, || client.generate(&payload)).await;
        self.ui.set_busy(false, None);

        let outcome = match result {
            Ok(response) => match response.first_text() {
                Some(text) => {
                    self.ui.set_output(text.trim());
                    SubmitOutcome::Completed
                }
                None => {
                    let message = response
                        .error
                        .map_or_else(|| NO_RESPONSE_MESSAGE.to_string(), |error| error.message);
                    self.ui.show_message(message, Severity::Danger);
                    SubmitOutcome::Failed
                }
            },
            Err(exhausted) => {
                self.ui
                    .show_message(format!("An error occurred: {exhausted}"), Severity::Danger);
                SubmitOutcome::Failed
            }
        };

        Ok(outcome)
    }
}

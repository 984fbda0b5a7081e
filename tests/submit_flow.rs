//! Submission contract tests.
//!
//! These tests drive the orchestrator against an in-memory transport to
//! verify the full submit state machine without any network access: the
//! validation short-circuits, the retry budget, and the response handling.

#![allow(clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glot_cli::app::{
    EMPTY_INPUT_MESSAGE, MISSING_KEY_MESSAGE, NO_RESPONSE_MESSAGE, Orchestrator, Severity,
    SubmitOutcome,
};
use glot_cli::gemini::{ApiError, ContentGenerator, GenerateResponse};
use glot_cli::language::LanguagePair;
use glot_cli::prompt::{ApiPayload, OperationKind};
use serde_json::{Value, json};

/// A scripted transport: pops one step per attempt and counts calls.
///
/// The last step repeats, so a single-entry script models a transport that
/// always behaves the same way. The call counter is shared so tests can
/// still observe it after the orchestrator takes ownership.
struct FakeTransport {
    calls: Rc<Cell<u32>>,
    script: RefCell<Vec<Result<Value, String>>>,
}

impl FakeTransport {
    fn new(script: Vec<Result<Value, String>>) -> (Self, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let transport = Self {
            calls: Rc::clone(&calls),
            script: RefCell::new(script),
        };
        (transport, calls)
    }

    fn succeeding_with(body: Value) -> (Self, Rc<Cell<u32>>) {
        Self::new(vec![Ok(body)])
    }
}

impl ContentGenerator for FakeTransport {
    async fn generate(&self, _payload: &ApiPayload) -> Result<GenerateResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);

        let mut script = self.script.borrow_mut();
        let step = if script.len() > 1 {
            script.remove(0)
        } else {
            script.first().cloned().unwrap()
        };

        match step {
            Ok(body) => Ok(serde_json::from_value(body).unwrap()),
            Err(message) => Err(ApiError::Status {
                status: 500,
                message,
            }),
        }
    }
}

fn english_tamil() -> LanguagePair {
    LanguagePair {
        source: "en".to_string(),
        target: "ta".to_string(),
    }
}

fn orchestrator(transport: FakeTransport) -> Orchestrator<FakeTransport> {
    Orchestrator::new(Some(transport), 3, english_tamil())
}

fn tamil_greeting_body() -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [{ "text": " வணக்கம் " }] } }
        ]
    })
}

#[tokio::test]
async fn empty_input_is_rejected_before_any_network_call() {
    let (transport, calls) = FakeTransport::succeeding_with(tamil_greeting_body());
    let mut orch = orchestrator(transport);

    let outcome = orch
        .submit(OperationKind::Translate, "   \n\t ")
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::RejectedInput);
    assert_eq!(calls.get(), 0);
    assert!(orch.ui.is_idle());
    assert!(orch.ui.output_text.is_none());

    let message = orch.ui.message().unwrap();
    assert_eq!(message.severity, Severity::Warning);
    assert_eq!(message.text, EMPTY_INPUT_MESSAGE);
}

#[tokio::test]
async fn missing_credential_is_rejected_before_any_network_call() {
    let mut orch: Orchestrator<FakeTransport> = Orchestrator::new(None, 3, english_tamil());

    let outcome = orch
        .submit(OperationKind::Translate, "Hello there")
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::RejectedConfiguration);
    assert!(orch.ui.is_idle());
    assert!(orch.ui.output_text.is_none());

    let message = orch.ui.message().unwrap();
    assert_eq!(message.severity, Severity::Danger);
    assert_eq!(message.text, MISSING_KEY_MESSAGE);
}

#[tokio::test]
async fn successful_translation_publishes_trimmed_output() {
    let (transport, calls) = FakeTransport::succeeding_with(tamil_greeting_body());
    let mut orch = orchestrator(transport);

    let outcome = orch
        .submit(OperationKind::Translate, "Hello there")
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(calls.get(), 1);
    assert_eq!(orch.ui.output_text.as_deref(), Some("வணக்கம்"));
    assert!(orch.ui.message().is_none());
    assert!(orch.ui.is_idle());
}

#[tokio::test]
async fn zero_candidates_reports_no_valid_response() {
    let (transport, _calls) = FakeTransport::succeeding_with(json!({ "candidates": [] }));
    let mut orch = orchestrator(transport);

    let outcome = orch
        .submit(OperationKind::Translate, "Hello there")
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(orch.ui.output_text.is_none());

    let message = orch.ui.message().unwrap();
    assert_eq!(message.severity, Severity::Danger);
    assert_eq!(message.text, NO_RESPONSE_MESSAGE);
}

#[tokio::test]
async fn zero_candidates_prefers_the_embedded_provider_message() {
    let body = json!({
        "candidates": [],
        "error": { "message": "Quota exceeded for this project" }
    });
    let (transport, _calls) = FakeTransport::succeeding_with(body);
    let mut orch = orchestrator(transport);

    let outcome = orch
        .submit(OperationKind::Proofread, "Hello there")
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(
        orch.ui.message().unwrap().text,
        "Quota exceeded for this project"
    );
}

#[tokio::test(start_paused = true)]
async fn persistent_failure_exhausts_the_retry_budget() {
    let (transport, calls) = FakeTransport::new(vec![Err("HTTP error: 500".to_string())]);
    let mut orch = orchestrator(transport);

    let outcome = orch
        .submit(OperationKind::Translate, "Hello there")
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(calls.get(), 3);
    assert!(orch.ui.is_idle());
    assert!(orch.ui.output_text.is_none());

    let message = orch.ui.message().unwrap();
    assert_eq!(message.severity, Severity::Danger);
    assert!(message.text.starts_with("An error occurred:"));
    assert!(message.text.contains("HTTP error: 500"));
}

#[tokio::test(start_paused = true)]
async fn transient_failure_recovers_within_the_budget() {
    let (transport, calls) = FakeTransport::new(vec![
        Err("HTTP error: 503".to_string()),
        Ok(tamil_greeting_body()),
    ]);
    let mut orch = orchestrator(transport);

    let outcome = orch
        .submit(OperationKind::Translate, "Hello there")
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Completed);
    assert_eq!(calls.get(), 2);
    assert_eq!(orch.ui.output_text.as_deref(), Some("வணக்கம்"));
}

#[tokio::test]
async fn a_submission_while_busy_is_rejected_without_side_effects() {
    let (transport, calls) = FakeTransport::succeeding_with(tamil_greeting_body());
    let mut orch = orchestrator(transport);
    orch.ui.set_busy(true, Some(OperationKind::Translate));

    let outcome = orch
        .submit(OperationKind::Proofread, "Hello there")
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Busy);
    assert_eq!(calls.get(), 0);
    assert!(orch.ui.busy);
}

#[tokio::test]
async fn a_new_submission_clears_the_previous_result() {
    let (transport, _calls) = FakeTransport::new(vec![
        Ok(tamil_greeting_body()),
        Ok(json!({ "candidates": [] })),
    ]);
    let mut orch = orchestrator(transport);

    let first = orch
        .submit(OperationKind::Translate, "Hello there")
        .await
        .unwrap();
    assert_eq!(first, SubmitOutcome::Completed);
    assert!(orch.ui.output_text.is_some());

    let second = orch
        .submit(OperationKind::Translate, "Hello again")
        .await
        .unwrap();
    assert_eq!(second, SubmitOutcome::Failed);
    assert!(orch.ui.output_text.is_none());
}

#[test]
fn swapping_languages_twice_restores_the_original_pair() {
    let mut orch: Orchestrator<FakeTransport> = Orchestrator::new(None, 3, english_tamil());

    orch.swap_languages();
    assert_eq!(orch.languages.source, "ta");
    assert_eq!(orch.languages.target, "en");

    orch.swap_languages();
    assert_eq!(orch.languages, english_tamil());
}

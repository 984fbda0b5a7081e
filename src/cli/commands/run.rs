use anyhow::Result;

use crate::app::{Orchestrator, SubmitOutcome};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::gemini::GeminiClient;
use crate::input::InputReader;
use crate::prompt::OperationKind;
use crate::ui::{Spinner, Style};
use crate::{status, warn};

pub struct RunOptions {
    pub operation: OperationKind,
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub model: Option<String>,
    pub retries: Option<u32>,
}

/// Runs one submission end to end and prints the result to stdout.
///
/// Rejections and failures print the orchestrator's message to stderr and
/// exit with a code describing the failure class.
pub async fn run_submit(options: RunOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let resolved = resolve_config(
        &ResolveOptions {
            from: options.from.clone(),
            to: options.to.clone(),
            model: options.model.clone(),
            retries: options.retries,
        },
        &manager.load_or_default(),
    )?;

    let text = InputReader::read(options.file.as_deref())?;
    status!("{}", Style::hint(format!("{} characters", text.chars().count())));

    let client = resolved
        .api_key
        .map(|key| GeminiClient::new(resolved.base_url, resolved.model, key));
    let mut orchestrator = Orchestrator::new(client, resolved.max_retries, resolved.languages);

    let spinner = Spinner::for_operation(options.operation);
    let outcome = orchestrator.submit(options.operation, &text).await?;
    spinner.stop();

    if outcome == SubmitOutcome::Completed {
        if let Some(output) = &orchestrator.ui.output_text {
            println!("{output}");
        }
        return Ok(());
    }

    if let Some(message) = orchestrator.ui.message() {
        warn!("{}", Style::severity(message.severity, &message.text));
    }
    std::process::exit(exit_code(outcome));
}

const fn exit_code(outcome: SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Completed => exitcode::OK,
        SubmitOutcome::RejectedConfiguration => exitcode::CONFIG,
        SubmitOutcome::RejectedInput => exitcode::DATAERR,
        SubmitOutcome::Busy | SubmitOutcome::Failed => exitcode::UNAVAILABLE,
    }
}

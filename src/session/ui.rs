//! Session mode rendering.

use crate::app::UiState;
use crate::prompt::OperationKind;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Translation & Proofreading",
        Style::header("glot"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(
    model: &str,
    max_retries: u32,
    source_name: &str,
    target_name: &str,
    mode: OperationKind,
) {
    println!("{}", Style::header("Configuration"));
    println!("  {}     {}", Style::label("mode"), Style::value(mode.label()));
    println!("  {}   {}", Style::label("source"), Style::value(source_name));
    println!("  {}   {}", Style::label("target"), Style::value(target_name));
    println!("  {}    {}", Style::label("model"), Style::value(model));
    println!(
        "  {}  {}",
        Style::label("retries"),
        Style::secondary(max_retries)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands: &[(&str, &str)] = &[
        ("/mode", "Show or set the operation (translate | proofread)"),
        ("/swap", "Swap source and target languages"),
        ("/from <code>", "Set the source language"),
        ("/to <code>", "Set the target language"),
        ("/languages", "List supported language codes"),
        ("/copy", "Copy the last output to the clipboard"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit session mode"),
    ];
    for (cmd, desc) in commands {
        println!("  {:14} {}", Style::command(cmd), Style::secondary(desc));
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

/// Prints the outcome of a submission: the output text, or the message the
/// orchestrator left behind.
pub fn render_result(state: &UiState) {
    if let Some(output) = &state.output_text {
        println!("{output}");
        println!();
    } else if let Some(message) = state.message() {
        println!("{}", Style::severity(message.severity, &message.text));
        println!();
    }
}

/// Prints the current message, if any.
pub fn render_message(state: &UiState) {
    if let Some(message) = state.message() {
        println!("{}", Style::severity(message.severity, &message.text));
        println!();
    }
}

use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::time::Instant;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::app::{Orchestrator, Severity};
use crate::config::ResolvedConfig;
use crate::gemini::GeminiClient;
use crate::language;
use crate::prompt::OperationKind;
use crate::status;
use crate::ui::{Spinner, Style};

/// An interactive session for translation and proofreading.
///
/// REPL analogue of the submission form: typed text is submitted under the
/// current mode, slash commands stand in for the page controls.
pub struct Session {
    model: String,
    max_retries: u32,
    mode: OperationKind,
    orchestrator: Orchestrator<GeminiClient>,
}

impl Session {
    pub fn new(config: ResolvedConfig) -> Self {
        let client = config.api_key.map(|key| {
            GeminiClient::new(config.base_url.clone(), config.model.clone(), key)
        });

        Self {
            model: config.model,
            max_retries: config.max_retries,
            mode: OperationKind::Translate,
            orchestrator: Orchestrator::new(client, config.max_retries, config.languages),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            // Messages auto-clear once their deadline has passed.
            self.orchestrator.ui.tick(Instant::now());

            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to submit, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.submit(&text).await?;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn submit(&mut self, text: &str) -> Result<()> {
        status!(
            "{}",
            Style::hint(format!("{} characters", text.chars().count()))
        );

        let spinner = Spinner::for_operation(self.mode);
        let _outcome = self.orchestrator.submit(self.mode, text).await?;
        spinner.stop();

        ui::render_result(&self.orchestrator.ui);
        Ok(())
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Mode(value) => self.set_mode(value.as_deref()),
            SlashCommand::Swap => self.swap_languages(),
            SlashCommand::From(value) => self.set_language(value.as_deref(), true),
            SlashCommand::To(value) => self.set_language(value.as_deref(), false),
            SlashCommand::Languages => language::print_languages(),
            SlashCommand::Copy => self.copy_output(),
            SlashCommand::Config => self.print_config(),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    fn set_mode(&mut self, value: Option<&str>) {
        match value {
            None => println!(
                "Current mode: {}\n",
                Style::value(self.mode.label())
            ),
            Some("translate") => {
                self.mode = OperationKind::Translate;
                println!("{} Mode set to {}\n", Style::success("✓"), Style::value("translate"));
            }
            Some("proofread") => {
                self.mode = OperationKind::Proofread;
                println!("{} Mode set to {}\n", Style::success("✓"), Style::value("proofread"));
            }
            Some(other) => {
                ui::print_error(&format!("Unknown mode: {other}"));
                println!("Available: translate, proofread");
            }
        }
    }

    fn set_language(&mut self, value: Option<&str>, source: bool) {
        let slot = if source { "from" } else { "to" };
        let Some(code) = value else {
            ui::print_error(&format!("Usage: /{slot} <code>"));
            return;
        };

        if let Err(e) = language::validate_language(code) {
            ui::print_error(&e.to_string());
            return;
        }

        if source {
            self.orchestrator.languages.source = code.to_string();
        } else {
            self.orchestrator.languages.target = code.to_string();
        }
        println!(
            "{} {} language set to {}\n",
            Style::success("✓"),
            if source { "Source" } else { "Target" },
            Style::value(Self::language_name(code))
        );
    }

    fn swap_languages(&mut self) {
        self.orchestrator.swap_languages();
        println!(
            "{} Swapped: {} → {}\n",
            Style::success("✓"),
            Style::value(self.source_name()),
            Style::value(self.target_name())
        );
    }

    fn copy_output(&mut self) {
        let Some(output) = self.orchestrator.ui.output_text.clone() else {
            // No-op when there is nothing to copy
            self.orchestrator
                .ui
                .show_message("Nothing to copy yet.", Severity::Info);
            ui::render_message(&self.orchestrator.ui);
            return;
        };

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(output)) {
            Ok(()) => self
                .orchestrator
                .ui
                .show_message("Copied to clipboard!", Severity::Success),
            Err(_) => self
                .orchestrator
                .ui
                .show_message("Failed to copy text.", Severity::Danger),
        }
        ui::render_message(&self.orchestrator.ui);
    }

    fn print_config(&self) {
        ui::print_config(
            &self.model,
            self.max_retries,
            self.source_name(),
            self.target_name(),
            self.mode,
        );
    }

    fn language_name(code: &str) -> &'static str {
        language::name_of(code).unwrap_or("?")
    }

    fn source_name(&self) -> &'static str {
        Self::language_name(&self.orchestrator.languages.source)
    }

    fn target_name(&self) -> &'static str {
        Self::language_name(&self.orchestrator.languages.target)
    }
}

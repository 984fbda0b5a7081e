//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{ConfigFile, ConfigManager, DEFAULT_KEY_ENV};
use crate::gemini::DEFAULT_MODEL;
use crate::language::LANGUAGES;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `--show`, prints the current configuration; otherwise interactively
/// edits the credential source, model, and default language pair.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_configuration();
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}  {}",
        Style::label("api key"),
        describe_key_source(&config)
    );
    println!(
        "  {}    {}",
        Style::label("model"),
        config
            .api
            .model
            .as_deref()
            .map_or_else(|| Style::secondary(format!("(default: {DEFAULT_MODEL})")), Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("source"),
        config
            .defaults
            .source
            .as_deref()
            .map_or_else(|| Style::secondary("(default: en)"), Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("target"),
        config
            .defaults
            .target
            .as_deref()
            .map_or_else(|| Style::secondary("(default: ta)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn describe_key_source(config: &ConfigFile) -> String {
    if let Some(env) = &config.api.key_env {
        Style::value(format!("${env}"))
    } else if config.api.key.is_some() {
        Style::value("(stored in config file)")
    } else {
        Style::secondary(format!("(default: ${DEFAULT_KEY_ENV})"))
    }
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    let key_source = Select::new(
        "API key source:",
        vec![
            "Environment variable (recommended)".to_string(),
            "Store in config file".to_string(),
        ],
    )
    .prompt()?;

    if key_source.starts_with("Environment") {
        let env_name = Text::new("Environment variable name:")
            .with_default(config.api.key_env.as_deref().unwrap_or(DEFAULT_KEY_ENV))
            .prompt()?;
        if env_name.trim().is_empty() {
            bail!("Environment variable name cannot be empty");
        }
        config.api.key_env = Some(env_name.trim().to_string());
        config.api.key = None;
    } else {
        let key = Text::new("API key:").prompt()?;
        if key.trim().is_empty() {
            bail!("API key cannot be empty");
        }
        config.api.key = Some(key.trim().to_string());
        config.api.key_env = None;
    }

    let model = Text::new("Model:")
        .with_default(config.api.model.as_deref().unwrap_or(DEFAULT_MODEL))
        .prompt()?;
    if model.trim().is_empty() {
        bail!("Model name cannot be empty");
    }
    config.api.model = Some(model.trim().to_string());

    config.defaults.source = Some(select_language(
        "Default source language:",
        config.defaults.source.as_deref(),
    )?);
    config.defaults.target = Some(select_language(
        "Default target language:",
        config.defaults.target.as_deref(),
    )?);

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn select_language(prompt: &str, default: Option<&str>) -> Result<String> {
    // Options in "code - Name" format
    let options: Vec<String> = LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_index = default
        .and_then(|d| LANGUAGES.iter().position(|(code, _)| *code == d))
        .unwrap_or(0);

    let selection = Select::new(prompt, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let code = selection.split(" - ").next().unwrap_or(&selection);
    Ok(code.to_string())
}

//! Interactive session mode.
//!
//! Provides a REPL-style interface with slash commands for language
//! selection, mode switching, and clipboard copy.

/// Slash command parsing and autocomplete.
pub mod command;
mod repl;
mod ui;

pub use repl::Session;

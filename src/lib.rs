//! # glot - Translation & Proofreading CLI
//!
//! `glot` submits text to the Gemini `generateContent` API for translation
//! or proofreading and prints the result. Requests are retried with full
//! exponential backoff and jitter.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file (default: English to Tamil)
//! glot ./notes.txt
//!
//! # Translate from stdin with an explicit pair
//! echo "Hello there" | glot --from en --to hi
//!
//! # Proofread instead of translating
//! glot proofread ./draft.txt
//!
//! # Interactive session mode
//! glot session
//! ```
//!
//! ## Configuration
//!
//! The API key comes from the `GEMINI_API_KEY` environment variable or from
//! `~/.config/glot/config.toml`:
//!
//! ```toml
//! [api]
//! key_env = "GEMINI_API_KEY"
//! model = "gemini-2.5-flash-preview-09-2025"
//! max_retries = 3
//!
//! [defaults]
//! source = "en"
//! target = "ta"
//! ```

/// Submission orchestration and UI state.
pub mod app;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// Gemini API client, wire types, and retry executor.
pub mod gemini;

/// Input reading from files and stdin.
pub mod input;

/// Language registry and selection.
pub mod language;

/// Global output configuration (quiet mode, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Prompt construction for translation and proofreading.
pub mod prompt;

/// Interactive session mode.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;

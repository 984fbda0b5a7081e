//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// One-shot submission handler (translate and proofread).
pub mod run;

/// Session mode command handler.
pub mod session;

//! XDG-style path resolution for the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for glot.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/glot` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/glot` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> Result<PathBuf> {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| {
            let home = dirs::home_dir().context("Failed to determine home directory")?;
            Ok(home.join(".config").join("glot"))
        },
        |xdg| Ok(PathBuf::from(xdg).join("glot")),
    )
}

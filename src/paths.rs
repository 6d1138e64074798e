//! XDG-style path utilities for the configuration directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "gemma-chat";

/// Returns the configuration directory for gemma-chat.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gemma-chat` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/gemma-chat` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        Some(xdg) => Ok(PathBuf::from(xdg).join(APP_DIR)),
        None => {
            let home = dirs::home_dir().context("Failed to determine home directory")?;
            Ok(home.join(".config").join(APP_DIR))
        }
    }
}

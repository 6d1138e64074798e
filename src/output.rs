//! Global output configuration.
//!
//! Replies go to stdout; prompts, status lines, warnings and errors go to
//! stderr. Colors can be disabled via flag or the `NO_COLOR` environment
//! variable.

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            // https://no-color.org/
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Initialize the global output configuration.
///
/// Only the first call has any effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::gateway::DEFAULT_ENDPOINT;
use crate::mode::{self, Mode};
use crate::paths;
use crate::ui::Style;

/// Settings in the `[chat]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    /// The OpenAI-compatible API endpoint URL.
    pub endpoint: Option<String>,
    /// Model to use without asking at startup.
    pub model: Option<String>,
    /// Mode the session starts in.
    pub mode: Option<String>,
    /// Stream replies as they are generated.
    pub stream: Option<bool>,
    /// Directory that `save` writes transcripts to.
    pub save_dir: Option<PathBuf>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
}

impl ChatConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gemma-chat/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The API endpoint URL.
    pub endpoint: String,
    /// The model, if one was given; otherwise the user is asked at startup.
    pub model: Option<String>,
    /// The initial mode.
    pub mode: Mode,
    /// Whether replies are streamed.
    pub stream: bool,
    /// Where transcripts are saved.
    pub save_dir: PathBuf,
    /// The API key (if any).
    pub api_key: Option<String>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// Force streaming on.
    pub stream: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if the configured mode is not a known mode.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let chat = &config_file.chat;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(chat.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let model = options.model.as_ref().or(chat.model.as_ref()).cloned();

    let mode = match chat.mode.as_deref() {
        None => Mode::default(),
        Some(name) => match Mode::from_name(name) {
            Some(mode) => mode,
            None => bail!(
                "Invalid mode in config file: '{name}'\n\n\
                 Available modes: {}",
                mode::available_names()
            ),
        },
    };

    Ok(ResolvedConfig {
        endpoint,
        model,
        mode,
        stream: options.stream || chat.stream.unwrap_or(false),
        save_dir: chat.save_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
        api_key: chat.get_api_key(),
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/gemma-chat/config.toml`
    /// or `~/.config/gemma-chat/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or invalid one is reported as
    /// a warning.
    pub fn load_or_default(&self) -> ConfigFile {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file");
            return ConfigFile::default();
        }

        self.load().unwrap_or_else(|e| {
            eprintln!(
                "{} {e:#}\nUsing default settings.\n",
                Style::warning("Warning:")
            );
            ConfigFile::default()
        })
    }
}

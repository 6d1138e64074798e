//! Configuration file loading and resolution.

mod manager;

pub use manager::{
    ChatConfig, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config,
};

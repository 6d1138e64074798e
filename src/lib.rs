//! # gemma-chat - Local Gemma Chat CLI
//!
//! `gemma-chat` is an interactive chat client for Gemma models served by a
//! local Ollama instance. It doubles as an English-to-Korean translator,
//! both sentence by sentence and for whole files.
//!
//! ## Features
//!
//! - **Modes**: switch between conversation, sentence translation, and
//!   document translation with `mode <name>`
//! - **File translation**: `file <path>` writes `<name>_korean.<ext>`
//!   next to the original
//! - **Transcripts**: `save` dumps the conversation as JSON
//! - **Streaming**: optionally print replies as they are generated
//!
//! ## Quick Start
//!
//! ```bash
//! # Pick a model from the menu, then chat
//! gemma-chat
//!
//! # Skip the menu
//! gemma-chat --model gemma2:9b
//!
//! # Script a session
//! printf 'mode 대화\nHello\nsave\nexit\n' | gemma-chat -m gemma2:2b
//! ```
//!
//! ## Configuration
//!
//! Optional settings are read from `~/.config/gemma-chat/config.toml`:
//!
//! ```toml
//! [chat]
//! endpoint = "http://localhost:11434"
//! model = "gemma2:9b"
//! mode = "번역"
//! stream = true
//! save_dir = "transcripts"
//! ```

/// Interactive chat loop, conversation state, and transcripts.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Model backend boundary and its HTTP implementation.
pub mod gateway;

/// Chat modes and their system prompts.
pub mod mode;

/// The selectable Gemma models.
pub mod models;

/// Global output configuration (colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// One-shot file translation.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

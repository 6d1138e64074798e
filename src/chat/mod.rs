//! Interactive chat mode.
//!
//! A prompt loop over a single conversation, with plain-word control
//! commands for switching modes, translating files, and saving transcripts.

/// Input classification and autocomplete.
pub mod command;
mod history;
mod input;
mod session;
/// Conversation dumps for the `save` command.
pub mod transcript;
mod ui;

pub use history::{Conversation, Message, Role};
pub use input::LineReader;
pub use session::{ChatSession, Flow, SessionConfig};

use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::command::{Command, Input, parse_input};
use super::history::Conversation;
use super::input::LineReader;
use super::transcript::save_transcript;
use super::ui;
use crate::gateway::Gateway;
use crate::mode::Mode;
use crate::translation::{TaskError, translate_file};
use crate::ui::Spinner;

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The API endpoint URL (for display).
    pub endpoint: String,
    /// The model every request targets.
    pub model: String,
    /// The mode the session starts in.
    pub mode: Mode,
    /// Print replies as they stream in instead of waiting for the whole reply.
    pub stream: bool,
    /// Directory that `save` writes transcripts to.
    pub save_dir: PathBuf,
}

/// Whether the loop keeps going after handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// The interactive command loop.
///
/// Owns the conversation and the current mode; every error that happens
/// while handling an input is reported and the loop carries on.
pub struct ChatSession<G> {
    config: SessionConfig,
    gateway: G,
    conversation: Conversation,
    mode: Mode,
}

impl<G: Gateway> ChatSession<G> {
    /// Creates a session whose conversation is seeded with the configured mode.
    pub fn new(config: SessionConfig, gateway: G) -> Self {
        let mode = config.mode;
        Self {
            conversation: Conversation::new(mode.system_prompt()),
            config,
            gateway,
            mode,
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Runs until a quit command, a cancelled prompt, or end of input.
    ///
    /// Only failures to read input are returned as errors.
    pub async fn run(&mut self, reader: &mut LineReader) -> Result<()> {
        ui::print_header(&self.config);
        ui::print_help();

        while let Some(line) = reader.read_line()? {
            if self.handle(parse_input(&line)).await == Flow::Stop {
                break;
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Dispatches one parsed input.
    pub async fn handle(&mut self, input: Input) -> Flow {
        match input {
            Input::Empty => {}
            Input::Command(Command::Quit) => return Flow::Stop,
            Input::Command(Command::Save) => self.save(),
            Input::Command(Command::Mode(name)) => {
                self.switch_mode(&name);
            }
            Input::Command(Command::File(path)) => self.translate(Path::new(&path)).await,
            Input::Command(Command::Reset) => self.reset(),
            Input::Text(text) => self.chat(text).await,
        }
        Flow::Continue
    }

    /// Switches to the named mode, discarding the conversation.
    ///
    /// Leaves everything untouched and returns `false` if the name is unknown.
    pub fn switch_mode(&mut self, name: &str) -> bool {
        let Some(mode) = Mode::from_name(name) else {
            ui::print_invalid_mode(name);
            return false;
        };

        self.conversation.reset(mode.system_prompt());
        self.mode = mode;
        tracing::info!(mode = mode.name(), "mode switched");
        ui::print_mode_switched(mode);
        true
    }

    fn reset(&mut self) {
        self.conversation.reset(self.mode.system_prompt());
        tracing::info!(mode = self.mode.name(), "conversation reset");
        ui::print_reset(self.mode);
    }

    fn save(&self) {
        match save_transcript(&self.conversation, &self.config.save_dir) {
            Ok(path) => ui::print_saved(&path),
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }

    async fn translate(&self, path: &Path) {
        let spinner = Spinner::new("Translating... (larger files take longer)");
        let result = translate_file(&self.gateway, path, &self.config.model).await;
        spinner.stop();

        match result {
            Ok(translated) => ui::print_translation(&translated),
            Err(TaskError::Gateway(e)) => {
                tracing::warn!(error = %e, "file translation failed");
                ui::print_gateway_error(&e);
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    async fn chat(&mut self, text: String) {
        self.conversation.push_user(text);

        let model = self.config.model.as_str();
        let history = self.conversation.snapshot();

        let result = if self.config.stream {
            let result = self
                .gateway
                .complete_streaming(model, history, |chunk: &str| {
                    print!("{chunk}");
                    let _ = io::stdout().flush();
                })
                .await;
            println!();
            println!();
            result
        } else {
            let spinner = Spinner::new("Thinking...");
            let result = self.gateway.complete(model, history).await;
            spinner.stop();
            if let Ok(reply) = &result {
                ui::print_reply(reply);
            }
            result
        };

        match result {
            Ok(reply) => self.conversation.push_assistant(reply),
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                ui::print_gateway_error(&e);
            }
        }
    }
}

use anyhow::{Context, Result};
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::io::{self, BufRead, IsTerminal};

use super::command::CommandCompleter;
use crate::ui::is_prompt_cancelled;

/// Source of input lines for the chat loop.
///
/// On a terminal lines come from an `inquire` prompt with command
/// completion. Otherwise stdin is read line by line, so the loop can be
/// driven from a pipe or a script.
pub struct LineReader {
    interactive: bool,
    render_config: RenderConfig<'static>,
}

impl LineReader {
    pub fn from_stdin() -> Self {
        Self::new(io::stdin().is_terminal())
    }

    pub fn new(interactive: bool) -> Self {
        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self {
            interactive,
            render_config,
        }
    }

    pub const fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Reads the next line.
    ///
    /// Returns `Ok(None)` at end of input or when the user cancels the prompt.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        if self.interactive {
            self.prompt()
        } else {
            read_stdin_line()
        }
    }

    fn prompt(&self) -> Result<Option<String>> {
        let input = Text::new("")
            .with_render_config(self.render_config)
            .with_autocomplete(CommandCompleter)
            .with_help_message("Type a message, 'mode <name>', 'file <path>', 'save', 'reset' or 'exit'")
            .prompt();

        match input {
            Ok(line) => Ok(Some(line)),
            Err(e) if is_prompt_cancelled(&e) => {
                println!(); // Clear line before goodbye message
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to read input"),
        }
    }
}

fn read_stdin_line() -> Result<Option<String>> {
    let mut line = String::new();
    let bytes_read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;

    Ok((bytes_read > 0).then_some(line))
}

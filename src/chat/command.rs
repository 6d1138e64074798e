use inquire::autocompletion::{Autocomplete, Replacement};

use crate::mode::Mode;

/// Whole-line inputs that end the session (compared case-insensitively).
pub const QUIT_KEYWORDS: &[&str] = &["종료", "exit", "quit"];

/// Control commands recognized by the chat loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Save,
    Mode(String),
    File(String),
    Reset,
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(Command),
    Empty,
}

/// Classifies one line of user input.
///
/// Rules are checked in order: quit keywords, `save`, `mode <name>`,
/// `file <path>`, `reset`, empty line, and finally free text.
pub fn parse_input(input: &str) -> Input {
    let input = input.trim();
    let lowered = input.to_lowercase();

    if QUIT_KEYWORDS.contains(&lowered.as_str()) {
        return Input::Command(Command::Quit);
    }

    if lowered == "save" {
        return Input::Command(Command::Save);
    }

    if let Some(name) = strip_keyword(input, "mode") {
        return Input::Command(Command::Mode(name.trim().to_string()));
    }

    if let Some(path) = strip_keyword(input, "file") {
        return Input::Command(Command::File(unquote(path.trim()).to_string()));
    }

    if lowered == "reset" {
        return Input::Command(Command::Reset);
    }

    if input.is_empty() {
        return Input::Empty;
    }

    Input::Text(input.to_string())
}

/// Returns the rest of `input` when it starts with `keyword` followed by
/// whitespace. The keyword match ignores ASCII case.
fn strip_keyword<'a>(input: &'a str, keyword: &str) -> Option<&'a str> {
    let (head, rest) = input.split_at_checked(keyword.len())?;
    (head.eq_ignore_ascii_case(keyword) && rest.starts_with(char::is_whitespace)).then_some(rest)
}

fn unquote(path: &str) -> &str {
    path.trim_matches('"').trim_matches('\'')
}

/// Suggestions offered by the prompt: (completion, description).
fn command_entries() -> Vec<(String, &'static str)> {
    let mut entries: Vec<(String, &'static str)> = Mode::ALL
        .iter()
        .map(|mode| (format!("mode {}", mode.name()), mode.description()))
        .collect();

    entries.extend([
        ("file ".to_string(), "Translate a file to Korean"),
        ("save".to_string(), "Save the conversation"),
        ("reset".to_string(), "Clear the conversation"),
        ("exit".to_string(), "Quit"),
    ]);

    entries
}

fn format_entry(command: &str, description: &str) -> String {
    format!("{}  ({description})", command.trim_end())
}

/// Command autocompleter
#[derive(Clone, Default)]
pub struct CommandCompleter;

impl Autocomplete for CommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if input.is_empty() {
            return Ok(vec![]);
        }

        let lowered = input.to_lowercase();
        let suggestions: Vec<String> = command_entries()
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(&lowered) && cmd.as_str() != lowered)
            .map(|(cmd, desc)| format_entry(cmd, desc))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement = highlighted_suggestion.and_then(|suggestion| {
            command_entries()
                .into_iter()
                .find(|(cmd, desc)| format_entry(cmd, desc) == suggestion)
                .map(|(cmd, _)| cmd)
        });
        Ok(replacement)
    }
}

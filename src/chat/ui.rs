//! Chat mode UI components.

use std::path::Path;

use crate::gateway::GatewayError;
use crate::mode::{self, Mode};
use crate::translation::TranslatedFile;
use crate::ui::Style;

use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Local Gemma Chat",
        Style::header("gemma-chat"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "  {}     {}",
        Style::label("model"),
        Style::value(&config.model)
    );
    println!(
        "  {}      {}",
        Style::label("mode"),
        Style::value(config.mode)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Modes"));
    mode::print_modes();
    println!("{}", Style::header("Files"));
    println!(
        "  {} {}",
        Style::command("file <path>    "),
        Style::secondary("Translate an English file to Korean")
    );
    println!("{}", Style::header("Other"));
    println!(
        "  {} {}",
        Style::command("save           "),
        Style::secondary("Save the conversation as JSON")
    );
    println!(
        "  {} {}",
        Style::command("reset          "),
        Style::secondary("Clear the conversation (keeps the mode)")
    );
    println!(
        "  {} {}",
        Style::command("exit / 종료    "),
        Style::secondary("Quit")
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_mode_switched(mode: Mode) {
    println!(
        "{} Switched to {} mode\n",
        Style::success("✓"),
        Style::value(mode)
    );
}

pub fn print_invalid_mode(name: &str) {
    print_error(&format!(
        "Invalid mode: '{name}'. Available: {}",
        mode::available_names()
    ));
}

pub fn print_reset(mode: Mode) {
    println!(
        "{} Conversation cleared (mode: {})\n",
        Style::success("✓"),
        Style::value(mode)
    );
}

pub fn print_saved(path: &Path) {
    println!(
        "{} Conversation saved to {}\n",
        Style::success("✓"),
        Style::secondary(path.display())
    );
}

pub fn print_reply(reply: &str) {
    println!("{reply}");
    println!();
}

pub fn print_translation(translated: &TranslatedFile) {
    println!("{} Translation complete", Style::success("✓"));
    println!(
        "  {}  {}",
        Style::label("saved to"),
        Style::value(translated.output_path.display())
    );
    println!();
    println!("{}", Style::secondary("--- translation ---"));
    println!("{}", translated.text);
    println!("{}", Style::secondary("--- end ---"));
    println!();
}

pub fn print_gateway_error(err: &GatewayError) {
    eprintln!("{} {err}", Style::error("Error:"));
    if let Some(hint) = err.hint() {
        eprintln!("{}", Style::hint(hint));
    }
    eprintln!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

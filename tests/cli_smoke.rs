#![allow(clippy::unwrap_used)]
//! CLI smoke tests driving the binary over piped stdin.
//!
//! Each test gets its own working and config directory so that saved
//! transcripts and translated files land somewhere disposable.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// An endpoint nothing listens on.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1";

#[allow(deprecated)]
fn gemma_chat(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gemma-chat").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--endpoint", DEAD_ENDPOINT]);
    cmd
}

#[test]
fn test_help_displays_usage() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--stream"));
}

#[test]
fn test_version_displays_version() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_exit_keyword_ends_session() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .args(["--model", "gemma2:2b"])
        .write_stdin("exit\nthis line is never read\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stderr(predicate::str::contains("Cannot connect").not());
}

#[test]
fn test_end_of_input_ends_session() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .args(["--model", "gemma2:2b"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_model_choice_read_from_first_line() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .write_stdin("2\n종료\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using gemma2:9b"));
}

#[test]
fn test_invalid_model_choice_uses_default() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .write_stdin("9\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using gemma2:2b"));
}

#[test]
fn test_mode_switch_and_invalid_mode() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .args(["--model", "gemma2:2b"])
        .write_stdin("mode 대화\nmode chat\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to 대화 mode"))
        .stderr(predicate::str::contains("Invalid mode: 'chat'"));
}

#[test]
fn test_save_twice_writes_two_files() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .args(["--model", "gemma2:2b"])
        .write_stdin("save\nsave\nexit\n")
        .assert()
        .success();

    let first = fs::read_to_string(dir.path().join("gemma_conversation_1.json")).unwrap();
    let second = fs::read_to_string(dir.path().join("gemma_conversation_1_2.json")).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("\"role\": \"system\""));
}

#[test]
fn test_unreachable_backend_is_reported_inline() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .args(["--model", "gemma2:2b"])
        .write_stdin("Hello\nsave\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot connect"))
        .stderr(predicate::str::contains("ollama serve"))
        .stdout(predicate::str::contains("Goodbye!"));

    // The user turn stays in the history even though the reply failed
    let saved = fs::read_to_string(dir.path().join("gemma_conversation_2.json")).unwrap();
    assert!(saved.contains("Hello"));
    assert!(!saved.contains("assistant"));
}

#[test]
fn test_file_not_found() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .args(["--model", "gemma2:2b"])
        .write_stdin("file \"missing.txt\"\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("File not found: missing.txt"));
}

#[test]
fn test_empty_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), "\n  \n").unwrap();

    gemma_chat(&dir)
        .args(["--model", "gemma2:2b"])
        .write_stdin("file empty.txt\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("File is empty"));

    assert!(!dir.path().join("empty_korean.txt").exists());
}

#[test]
fn test_invalid_mode_in_config_fails_startup() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config").join("gemma-chat");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[chat]\nmode = \"chat\"\n").unwrap();

    gemma_chat(&dir)
        .args(["--model", "gemma2:2b"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mode in config file"));
}

#[test]
fn test_config_file_sets_model_and_mode() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config").join("gemma-chat");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[chat]\nmodel = \"gemma2:27b\"\nmode = \"문서번역\"\n",
    )
    .unwrap();

    gemma_chat(&dir)
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using gemma2:27b"))
        .stdout(predicate::str::contains("문서번역"));
}

#[test]
fn test_unknown_model_warns_once_and_proceeds() {
    let dir = TempDir::new().unwrap();
    gemma_chat(&dir)
        .args(["--model", "llama3.2"])
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using llama3.2"))
        .stderr(predicate::str::contains("not one of the offered models").count(1));
}

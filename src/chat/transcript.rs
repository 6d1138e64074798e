//! Conversation dumps written by the `save` command.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Conversation;

const FILE_PREFIX: &str = "gemma_conversation_";

/// Writes the conversation as pretty-printed JSON into `dir`.
///
/// The file is named after the current message count. When that name is
/// taken, `_2`, `_3`, ... is appended so an earlier dump is never replaced.
pub fn save_transcript(conversation: &Conversation, dir: &Path) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(conversation.snapshot())
        .context("Failed to serialize conversation")?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let len = conversation.len();
    let mut attempt = 1u32;

    loop {
        let path = dir.join(file_name(len, attempt));

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                write_or_remove(&mut file, &path, json.as_bytes())
                    .with_context(|| format!("Failed to write transcript: {}", path.display()))?;
                tracing::info!(path = %path.display(), messages = len, "conversation saved");
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to create transcript: {}", path.display()));
            }
        }
    }
}

/// Writes `contents` plus a trailing newline, deleting `path` if that fails.
///
/// A failed save leaves no partial transcript behind to claim the name.
fn write_or_remove(file: &mut impl Write, path: &Path, contents: &[u8]) -> io::Result<()> {
    let result = file
        .write_all(contents)
        .and_then(|()| file.write_all(b"\n"))
        .and_then(|()| file.flush());

    if result.is_err()
        && let Err(e) = fs::remove_file(path)
    {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove partial transcript");
    }

    result
}

fn file_name(len: usize, attempt: u32) -> String {
    if attempt == 1 {
        format!("{FILE_PREFIX}{len}.json")
    } else {
        format!("{FILE_PREFIX}{len}_{attempt}.json")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::chat::{Message, Role};
    use tempfile::TempDir;

    fn sample_conversation() -> Conversation {
        let mut conversation = Conversation::new("sys");
        conversation.push_user("Hello");
        conversation.push_assistant("안녕하세요");
        conversation
    }

    #[test]
    fn test_file_name_uses_length() {
        let temp_dir = TempDir::new().unwrap();
        let path = save_transcript(&sample_conversation(), temp_dir.path()).unwrap();
        assert_eq!(path, temp_dir.path().join("gemma_conversation_3.json"));
    }

    #[test]
    fn test_saved_json_round_trips_and_keeps_hangul() {
        let temp_dir = TempDir::new().unwrap();
        let path = save_transcript(&sample_conversation(), temp_dir.path()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("안녕하세요"));
        assert!(raw.contains("\n  {")); // pretty-printed

        let messages: Vec<Message> = serde_json::from_str(&raw).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(messages[2].content(), "안녕하세요");
    }

    #[test]
    fn test_saving_twice_creates_distinct_files() {
        let temp_dir = TempDir::new().unwrap();
        let conversation = sample_conversation();

        let first = save_transcript(&conversation, temp_dir.path()).unwrap();
        let second = save_transcript(&conversation, temp_dir.path()).unwrap();
        let third = save_transcript(&conversation, temp_dir.path()).unwrap();

        assert_ne!(first, second);
        assert_eq!(second, temp_dir.path().join("gemma_conversation_3_2.json"));
        assert_eq!(third, temp_dir.path().join("gemma_conversation_3_3.json"));
        assert_eq!(
            fs::read_to_string(&first).unwrap(),
            fs::read_to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("logs").join("chat");

        let path = save_transcript(&sample_conversation(), &nested).unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gemma_conversation_1.json");
        fs::write(&path, "").unwrap();

        let err = write_or_remove(&mut FailingWriter, &path, b"[]").unwrap_err();

        assert_eq!(err.to_string(), "disk full");
        assert!(!path.exists());
    }

    #[test]
    fn test_successful_write_adds_trailing_newline() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        let mut buffer = Vec::new();

        write_or_remove(&mut buffer, &path, b"[]").unwrap();

        assert_eq!(buffer, b"[]\n");
    }
}

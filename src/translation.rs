//! One-shot translation of a text file.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::chat::Conversation;
use crate::gateway::{Gateway, GatewayError};
use crate::mode::Mode;

/// Inserted between the file stem and its extension in the output name.
pub const OUTPUT_SUFFIX: &str = "_korean";

/// Why a file translation did not produce an output file.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// A successfully translated file.
#[derive(Debug, Clone)]
pub struct TranslatedFile {
    pub output_path: PathBuf,
    pub text: String,
}

/// Translates the file at `path` and writes the result next to it.
///
/// The document is sent whole, as the only user turn of a fresh
/// conversation seeded with the document-translation prompt. An existing
/// file at the output path is overwritten.
pub async fn translate_file<G: Gateway>(
    gateway: &G,
    path: &Path,
    model: &str,
) -> Result<TranslatedFile, TaskError> {
    let content = read_input(path)?;

    if content.trim().is_empty() {
        return Err(TaskError::EmptyInput(path.to_path_buf()));
    }

    tracing::info!(path = %path.display(), bytes = content.len(), "translating file");

    let mut conversation = Conversation::new(Mode::DocumentTranslation.system_prompt());
    conversation.push_user(content);

    let text = gateway.complete(model, conversation.snapshot()).await?;

    let output_path = output_path(path);
    fs::write(&output_path, &text).map_err(|source| TaskError::Write {
        path: output_path.clone(),
        source,
    })?;

    tracing::info!(output = %output_path.display(), "translation written");

    Ok(TranslatedFile { output_path, text })
}

/// Derives `<stem>_korean<.ext>` in the same directory as `input`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(OUTPUT_SUFFIX);

    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    input.with_file_name(name)
}

fn read_input(path: &Path) -> Result<String, TaskError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            TaskError::NotFound(path.to_path_buf())
        } else {
            TaskError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

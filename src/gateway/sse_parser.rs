//! Server-Sent Events (SSE) parser for OpenAI-compatible streaming responses.
//!
//! This module provides utilities for parsing SSE streams from chat completion APIs.

use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

use super::GatewayError;

#[derive(Debug, Deserialize)]
struct StreamResponse {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    error: Option<StreamError>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamError {
    message: String,
}

/// What a single SSE line means for the reply being assembled.
#[derive(Debug, PartialEq, Eq)]
enum SseEvent {
    /// A piece of reply text.
    Content(String),
    /// The `[DONE]` terminator.
    Done,
    /// The server reported a failure inside the stream.
    Error(String),
    /// Comments, blank lines, keep-alives and empty deltas.
    Skip,
}

/// Converts a raw SSE byte stream into a stream of text chunks.
///
/// Bytes are buffered until a full line is available, so a multibyte
/// character split across network chunks is decoded intact. The output ends
/// at `[DONE]` or right after the first error it yields. A byte stream that
/// ends before `[DONE]` yields a final error so a truncated reply is never
/// taken as complete.
pub fn sse_to_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String, GatewayError>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer: Vec<u8> = Vec::new();
        let mut exhausted = false;

        while !exhausted {
            match byte_stream.next().await {
                Some(Ok(chunk)) => buffer.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    yield Err(GatewayError::Unknown(format!("stream interrupted: {e}")));
                    return;
                }
                None => exhausted = true,
            }

            while let Some(line) = take_line(&mut buffer, exhausted) {
                match parse_sse_line(line.trim()) {
                    SseEvent::Content(content) => yield Ok(content),
                    SseEvent::Done => return,
                    SseEvent::Error(message) => {
                        yield Err(GatewayError::Unknown(message));
                        return;
                    }
                    SseEvent::Skip => {}
                }
            }
        }

        tracing::debug!("event stream closed without [DONE]");
        yield Err(GatewayError::Unknown("stream ended early".to_string()));
    }
}

/// Removes and decodes the next complete line from `buffer`.
///
/// Once the input is `exhausted`, a trailing line without a newline is
/// returned as well.
fn take_line(buffer: &mut Vec<u8>, exhausted: bool) -> Option<String> {
    let end = match buffer.iter().position(|&b| b == b'\n') {
        Some(newline) => newline + 1,
        None if exhausted && !buffer.is_empty() => buffer.len(),
        None => return None,
    };

    let line: Vec<u8> = buffer.drain(..end).collect();
    Some(String::from_utf8_lossy(&line).into_owned())
}

fn parse_sse_line(line: &str) -> SseEvent {
    let Some(data) = line.strip_prefix("data:") else {
        return SseEvent::Skip;
    };
    let data = data.trim_start();

    if data == "[DONE]" {
        return SseEvent::Done;
    }

    let Ok(response) = serde_json::from_str::<StreamResponse>(data) else {
        return SseEvent::Skip;
    };

    if let Some(error) = response.error {
        return SseEvent::Error(error.message);
    }

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .collect();

    if content.is_empty() {
        SseEvent::Skip
    } else {
        SseEvent::Content(content)
    }
}

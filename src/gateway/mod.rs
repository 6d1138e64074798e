//! Boundary between the chat loop and the model backend.
//!
//! The loop only ever sees the [`Gateway`] trait. [`HttpGateway`] is the
//! implementation that talks to an OpenAI-compatible server such as Ollama.

mod client;
mod error;
mod sse_parser;

use std::future::Future;

use crate::chat::Message;

pub use client::{DEFAULT_ENDPOINT, HttpGateway};
pub use error::GatewayError;

/// Sends a message history to a model and returns its reply.
///
/// Implementations must not retry and must leave `history` untouched; the
/// caller appends the reply once it has one.
pub trait Gateway: Send + Sync {
    /// Sends the full history and waits for the complete reply.
    fn complete(
        &self,
        model: &str,
        history: &[Message],
    ) -> impl Future<Output = Result<String, GatewayError>> + Send;

    /// Like [`Gateway::complete`], but hands reply text to `on_chunk` as it
    /// arrives. Returns the whole reply.
    ///
    /// The default implementation delivers the reply as a single chunk.
    fn complete_streaming<F>(
        &self,
        model: &str,
        history: &[Message],
        mut on_chunk: F,
    ) -> impl Future<Output = Result<String, GatewayError>> + Send
    where
        F: FnMut(&str) + Send,
    {
        async move {
            let reply = self.complete(model, history).await?;
            on_chunk(&reply);
            Ok(reply)
        }
    }
}

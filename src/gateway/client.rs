use futures_util::StreamExt;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::sse_parser::sse_to_text_stream;
use super::{Gateway, GatewayError};
use crate::chat::Message;

/// Where Ollama listens by default.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Gateway backed by an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct HttpGateway {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpGateway {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    async fn send(
        &self,
        model: &str,
        history: &[Message],
        stream: bool,
    ) -> Result<Response, GatewayError> {
        let url = self.url();
        tracing::debug!(%url, model, messages = history.len(), stream, "sending chat request");

        let body = ChatCompletionRequest {
            model,
            messages: history,
            stream,
        };

        let mut http_request = self.client.post(&url).json(&body);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request.send().await.map_err(|e| {
            if e.is_connect() {
                GatewayError::Unreachable {
                    endpoint: self.endpoint.clone(),
                }
            } else {
                GatewayError::Unknown(format!("request to {url} failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, %body, "chat request rejected");
            return Err(GatewayError::from_status(status, &body, model));
        }

        Ok(response)
    }
}

impl Gateway for HttpGateway {
    async fn complete(&self, model: &str, history: &[Message]) -> Result<String, GatewayError> {
        let response = self.send(model, history, false).await?;

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Unknown(format!("invalid response body: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| GatewayError::Unknown("response contained no choices".to_string()))
    }

    async fn complete_streaming<F>(
        &self,
        model: &str,
        history: &[Message],
        mut on_chunk: F,
    ) -> Result<String, GatewayError>
    where
        F: FnMut(&str) + Send,
    {
        let response = self.send(model, history, true).await?;

        let mut stream = std::pin::pin!(sse_to_text_stream(response.bytes_stream()));
        let mut reply = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            on_chunk(&chunk);
            reply.push_str(&chunk);
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_trims_trailing_slash() {
        let gateway = HttpGateway::new("http://localhost:11434/".to_string(), None);
        assert_eq!(gateway.url(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![
            Message::new(crate::chat::Role::System, "sys"),
            Message::new(crate::chat::Role::User, "Hello"),
        ];
        let body = ChatCompletionRequest {
            model: "gemma2:2b",
            messages: &messages,
            stream: false,
        };

        let json = serde_json::to_value(&body).unwrap_or_default();
        assert_eq!(json["model"], "gemma2:2b");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "Hello");
    }

    #[test]
    fn test_response_without_content_parses() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant"}}]}"#)
                .unwrap_or(ChatCompletionResponse { choices: vec![] });
        assert_eq!(parsed.choices.len(), 1);
        assert!(parsed.choices[0].message.content.is_none());
    }
}

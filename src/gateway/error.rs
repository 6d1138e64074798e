use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// A classified failure from the model backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The backend does not have the requested model installed or loaded.
    #[error("Model '{model}' is not available: {detail}")]
    ModelUnavailable { model: String, detail: String },

    /// Nothing answered at the configured endpoint.
    #[error("Cannot connect to the model server at {endpoint}")]
    Unreachable { endpoint: String },

    /// Any other backend failure.
    #[error("Model server error: {0}")]
    Unknown(String),
}

impl GatewayError {
    /// Suggested remedy to show below the error, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ModelUnavailable { model, .. } => Some(format!(
                "The model may not be installed. Install it with: ollama pull {model}"
            )),
            Self::Unreachable { .. } => {
                Some("Make sure the Ollama server is running: ollama serve".to_string())
            }
            Self::Unknown(_) => None,
        }
    }

    /// Classifies a non-success HTTP response.
    pub(crate) fn from_status(status: StatusCode, body: &str, model: &str) -> Self {
        let detail = error_detail(body);
        if status == StatusCode::NOT_FOUND {
            Self::ModelUnavailable {
                model: model.to_string(),
                detail,
            }
        } else if detail.is_empty() {
            Self::Unknown(format!("request failed with status {status}"))
        } else {
            Self::Unknown(format!("request failed with status {status}: {detail}"))
        }
    }
}

/// Pulls the human-readable message out of an error body.
///
/// Understands both `{"error": {"message": "..."}}` (OpenAI style) and
/// `{"error": "..."}` (Ollama native style). Anything else is returned trimmed.
pub(crate) fn error_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    match value.get("error") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Object(object)) => object
            .get("message")
            .and_then(Value::as_str)
            .map_or_else(|| body.trim().to_string(), str::to_string),
        _ => body.trim().to_string(),
    }
}

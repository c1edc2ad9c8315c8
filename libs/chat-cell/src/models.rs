// libs/chat-cell/src/models.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==============================================================================
// CHAT PROXY DOMAIN MODELS
// ==============================================================================

/// Inbound chat message from the portal UI.
///
/// `emotion` and `intent` are free-form hints derived by keyword matching,
/// not validated enums. Either may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

// ==============================================================================
// PROVIDER WIRE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI chat-completions request body.
///
/// `user_context` is a non-standard passthrough field the patient route uses
/// to carry emotion/intent hints alongside the conversation; OpenAI ignores
/// unknown fields.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_context: Option<UserContext>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
}

/// Perplexity chat request body with the full sampling/search parameter set
/// the health route pins.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub stream: bool,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
    pub search_domain_filter: Vec<String>,
    pub return_images: bool,
    pub return_related_questions: bool,
    pub search_recency_filter: String,
}

/// Shared success shape for both providers: only the choices list matters.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionMessage {
    #[serde(default)]
    pub content: Option<String>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum ChatProxyError {
    #[error("Chat provider not configured: {provider}")]
    NotConfigured { provider: String },

    /// Upstream returned a non-success status. Only the code is kept; the
    /// upstream body is logged server-side and never surfaced to clients.
    #[error("Upstream provider returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("Upstream response contained no completion choices")]
    EmptyCompletion,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<reqwest::Error> for ChatProxyError {
    fn from(err: reqwest::Error) -> Self {
        ChatProxyError::Internal {
            message: err.to_string(),
        }
    }
}

// libs/chat-cell/src/services/openai.rs
use reqwest::{header, Client};
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::{
    ChatCompletionRequest, ChatCompletionResponse, ChatProxyError, PromptMessage, UserContext,
};

const CHAT_MODEL: &str = "gpt-4o-mini";

const DOCTOR_BASE_PROMPT: &str = "You are a helpful medical assistant.";

const PATIENT_SYSTEM_PROMPT: &str = "You are a supportive medical assistant helping a patient \
    navigate their care. Answer briefly and in plain language, and recommend contacting the \
    care team for anything urgent.";

/// OpenAI chat-completions client backing the doctor and patient routes.
pub struct OpenAiChatClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiChatClient {
    pub fn new(config: &AppConfig) -> Result<Self, ChatProxyError> {
        if !config.is_assistant_configured() {
            return Err(ChatProxyError::NotConfigured {
                provider: "openai".to_string(),
            });
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.clone(),
        })
    }

    /// Doctor route: hints are folded into the system prompt text.
    pub async fn doctor_reply(
        &self,
        message: &str,
        emotion: Option<&str>,
        intent: Option<&str>,
    ) -> Result<String, ChatProxyError> {
        let request_body = ChatCompletionRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![
                PromptMessage::system(compose_doctor_prompt(emotion, intent)),
                PromptMessage::user(message),
            ],
            temperature: 0.7,
            user_context: None,
        };

        self.complete(request_body).await
    }

    /// Patient route: hints ride in a `user_context` field on the request
    /// body instead of the prompt text.
    pub async fn patient_reply(
        &self,
        message: &str,
        emotion: Option<&str>,
        intent: Option<&str>,
    ) -> Result<String, ChatProxyError> {
        let user_context = if emotion.is_some() || intent.is_some() {
            Some(UserContext {
                emotion: emotion.map(str::to_string),
                intent: intent.map(str::to_string),
            })
        } else {
            None
        };

        let request_body = ChatCompletionRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![
                PromptMessage::system(PATIENT_SYSTEM_PROMPT),
                PromptMessage::user(message),
            ],
            temperature: 0.7,
            user_context,
        };

        self.complete(request_body).await
    }

    async fn complete(&self, body: ChatCompletionRequest) -> Result<String, ChatProxyError> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!("Sending chat completion request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI chat completion failed: {} - {}", status, error_text);
            return Err(ChatProxyError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let completion: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|e| ChatProxyError::Internal {
                    message: format!("Failed to parse completion response: {}", e),
                })?;

        let first = completion
            .choices
            .first()
            .ok_or(ChatProxyError::EmptyCompletion)?;

        Ok(first.message.content.clone().unwrap_or_default())
    }
}

/// Builds the doctor system prompt. The emotion clause reads "feeling X",
/// the intent clause "looking to Y", joined with "and" iff both are present.
pub fn compose_doctor_prompt(emotion: Option<&str>, intent: Option<&str>) -> String {
    match (emotion, intent) {
        (Some(emotion), Some(intent)) => format!(
            "{} The user appears to be feeling {} and looking to {}.",
            DOCTOR_BASE_PROMPT, emotion, intent
        ),
        (Some(emotion), None) => format!(
            "{} The user appears to be feeling {}.",
            DOCTOR_BASE_PROMPT, emotion
        ),
        (None, Some(intent)) => format!(
            "{} The user appears to be looking to {}.",
            DOCTOR_BASE_PROMPT, intent
        ),
        (None, None) => DOCTOR_BASE_PROMPT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> AppConfig {
        AppConfig {
            openai_api_key: "test-key".to_string(),
            perplexity_api_key: "test-key".to_string(),
            openai_base_url: "http://localhost:4010".to_string(),
            perplexity_base_url: "http://localhost:4011".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let config = create_test_config();
        let client = OpenAiChatClient::new(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_creation_fails_without_key() {
        let mut config = create_test_config();
        config.openai_api_key = "".to_string();

        let client = OpenAiChatClient::new(&config);
        assert!(matches!(
            client,
            Err(ChatProxyError::NotConfigured { .. })
        ));
    }

    #[test]
    fn test_prompt_with_both_hints() {
        let prompt = compose_doctor_prompt(Some("anxious"), Some("askingForHelp"));
        assert_eq!(
            prompt,
            "You are a helpful medical assistant. The user appears to be feeling anxious and looking to askingForHelp."
        );
    }

    #[test]
    fn test_prompt_with_emotion_only() {
        let prompt = compose_doctor_prompt(Some("sad"), None);
        assert_eq!(
            prompt,
            "You are a helpful medical assistant. The user appears to be feeling sad."
        );
    }

    #[test]
    fn test_prompt_with_intent_only() {
        let prompt = compose_doctor_prompt(None, Some("bookingAppointment"));
        assert_eq!(
            prompt,
            "You are a helpful medical assistant. The user appears to be looking to bookingAppointment."
        );
    }

    #[test]
    fn test_prompt_with_no_hints() {
        let prompt = compose_doctor_prompt(None, None);
        assert_eq!(prompt, "You are a helpful medical assistant.");
    }
}

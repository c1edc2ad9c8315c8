// libs/chat-cell/src/services/perplexity.rs
use reqwest::{header, Client};
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::{ChatCompletionResponse, ChatProxyError, PromptMessage, ResearchRequest};

const RESEARCH_MODEL: &str = "sonar";

const HEALTH_SYSTEM_PROMPT: &str = "You are a medical information assistant. Answer general \
    health questions with current, evidence-based information. Be concise, cite reputable \
    sources where possible, and remind the user to consult a clinician for diagnosis.";

/// Perplexity client backing the general health route.
pub struct PerplexityClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PerplexityClient {
    pub fn new(config: &AppConfig) -> Result<Self, ChatProxyError> {
        if !config.is_research_configured() {
            return Err(ChatProxyError::NotConfigured {
                provider: "perplexity".to_string(),
            });
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.perplexity_api_key.clone(),
            base_url: config.perplexity_base_url.clone(),
        })
    }

    pub async fn research_reply(&self, message: &str) -> Result<String, ChatProxyError> {
        let url = format!("{}/chat/completions", self.base_url);

        // Fixed parameter set: no domain filtering, month-recency web search,
        // low temperature, frequency penalty to curb repetition.
        let request_body = ResearchRequest {
            model: RESEARCH_MODEL.to_string(),
            messages: vec![
                PromptMessage::system(HEALTH_SYSTEM_PROMPT),
                PromptMessage::user(message),
            ],
            max_tokens: 1000,
            temperature: 0.2,
            top_p: 0.9,
            top_k: 0,
            stream: false,
            presence_penalty: 0.0,
            frequency_penalty: 1.0,
            search_domain_filter: Vec::new(),
            return_images: false,
            return_related_questions: false,
            search_recency_filter: "month".to_string(),
        };

        debug!("Sending research completion request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Perplexity completion failed: {} - {}", status, error_text);
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

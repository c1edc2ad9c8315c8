use std::sync::Arc;
use serde_json::json;

use shared_config::AppConfig;

pub struct TestConfig {
    pub openai_api_key: String,
    pub perplexity_api_key: String,
    pub openai_base_url: String,
    pub perplexity_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            openai_api_key: "test-openai-key".to_string(),
            perplexity_api_key: "test-perplexity-key".to_string(),
            openai_base_url: "http://localhost:4010".to_string(),
            perplexity_base_url: "http://localhost:4011".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            openai_api_key: self.openai_api_key.clone(),
            perplexity_api_key: self.perplexity_api_key.clone(),
            openai_base_url: self.openai_base_url.clone(),
            perplexity_base_url: self.perplexity_base_url.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct MockProviderResponses;

impl MockProviderResponses {
    /// Minimal OpenAI-style chat-completions success body.
    pub fn chat_completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    /// Perplexity success body; same choices shape, different model id.
    pub fn research_completion(content: &str) -> serde_json::Value {
        json!({
            "id": "pplx-test",
            "model": "sonar",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": content
                    },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    /// A completion body with no choices at all.
    pub fn empty_completion() -> serde_json::Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": []
        })
    }

    pub fn error_response(message: &str, code: &str) -> serde_json::Value {
        json!({
            "error": {
                "message": message,
                "code": code
            }
        })
    }
}

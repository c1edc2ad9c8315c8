use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub perplexity_api_key: String,
    pub openai_base_url: String,
    pub perplexity_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("OPENAI_API_KEY not set, using empty value");
                    String::new()
                }),
            perplexity_api_key: env::var("PERPLEXITY_API")
                .unwrap_or_else(|_| {
                    warn!("PERPLEXITY_API not set, using empty value");
                    String::new()
                }),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            perplexity_base_url: env::var("PERPLEXITY_BASE_URL")
                .unwrap_or_else(|_| "https://api.perplexity.ai".to_string()),
        };

        if !config.is_assistant_configured() || !config.is_research_configured() {
            warn!("Application not fully configured - missing provider API keys");
        }

        config
    }

    pub fn is_assistant_configured(&self) -> bool {
        !self.openai_api_key.is_empty() && !self.openai_base_url.is_empty()
    }

    pub fn is_research_configured(&self) -> bool {
        !self.perplexity_api_key.is_empty() && !self.perplexity_base_url.is_empty()
    }
}

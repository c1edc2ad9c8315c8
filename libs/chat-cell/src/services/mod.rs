// libs/chat-cell/src/services/mod.rs

pub mod hints;
pub mod openai;
pub mod payload;
pub mod perplexity;

pub use openai::OpenAiChatClient;
pub use payload::{extract_payload, ExtractedPayload};
pub use perplexity::PerplexityClient;

// libs/chat-cell/src/lib.rs
//! # Chat Cell
//!
//! This cell proxies portal chat messages to upstream LLM providers and
//! normalizes their replies for the browser.
//!
//! ## Features
//!
//! - **Doctor chat**: OpenAI-backed replies with emotion/intent hints folded
//!   into the system prompt, plus a curated-links short-circuit for messages
//!   asking for references
//! - **Patient chat**: same provider, hints carried as request-body context
//! - **General health chat**: Perplexity-backed answers with web search,
//!   fence-stripping and best-effort JSON extraction of the reply
//! - **Hint fallback**: keyword-based emotion/intent detection when the
//!   client supplies none
//!
//! ## Architecture
//!
//! ```text
//! +-----------------------------------------------------+
//! |                    Chat Cell                        |
//! +-----------------------------------------------------+
//! |  handlers.rs    |  HTTP endpoint handlers           |
//! |  router.rs      |  Route definitions                |
//! |  models.rs      |  Request/response & wire models   |
//! |  services/      |  Provider clients & pure helpers  |
//! |    openai.rs    |  OpenAI chat-completions client   |
//! |    perplexity.rs|  Perplexity search client         |
//! |    payload.rs   |  Fence stripping / JSON extraction|
//! |    hints.rs     |  Emotion/intent keyword fallback  |
//! +-----------------------------------------------------+
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /chat-doctor` - doctor-facing chat proxy
//! - `POST /chat-patient` - patient-facing chat proxy
//! - `POST /chat` - general health chat proxy
//! - `GET /chat` - static usage text
//! - `GET /chat/health` - provider configuration status
//!
//! ## Configuration
//!
//! Required environment variables:
//! - `OPENAI_API_KEY` - doctor/patient chat provider key
//! - `PERPLEXITY_API` - general health chat provider key
//! - `OPENAI_BASE_URL` / `PERPLEXITY_BASE_URL` - optional endpoint overrides

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types
pub use models::{ChatProxyError, ChatRequest};

pub use services::{extract_payload, ExtractedPayload, OpenAiChatClient, PerplexityClient};

pub use router::chat_routes;

// libs/chat-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

/// Creates the chat proxy routes. These are public: the portal's external
/// backend owns authentication, and these routes hold no user data.
pub fn chat_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route(
            "/chat",
            get(handlers::health_chat_help).post(handlers::health_chat),
        )
        .route("/chat-doctor", post(handlers::doctor_chat))
        .route("/chat-patient", post(handlers::patient_chat))
        .route("/chat/health", get(handlers::chat_health_check))
        .with_state(state)
}

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use chat_cell::router::chat_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "CareBridge portal API is running!" }))
        .nest("/api", chat_routes(state.clone()))
}

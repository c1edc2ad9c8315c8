// libs/chat-cell/src/handlers.rs
use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{ChatProxyError, ChatRequest};
use crate::services::{hints, payload, OpenAiChatClient, PerplexityClient};

/// Canned reply for doctor-route messages asking for links or references.
/// Served without calling the upstream provider.
const CURATED_MEDICAL_RESOURCES: &str = "Here are some trusted medical references you can consult:\n\
- MedlinePlus: https://medlineplus.gov\n\
- Mayo Clinic: https://www.mayoclinic.org\n\
- CDC Health Topics: https://www.cdc.gov/health-topics.html\n\
- World Health Organization: https://www.who.int/health-topics\n\
- PubMed: https://pubmed.ncbi.nlm.nih.gov";

const HEALTH_CHAT_HELP: &str = "Send a POST request with a JSON body of the form \
{\"message\": \"your health question\"} to receive an answer from the health assistant.";

// ==============================================================================
// DOCTOR / PATIENT CHAT HANDLERS
// ==============================================================================

/// Doctor-facing chat proxy. Messages asking for links or references get the
/// curated resource list; everything else goes to the assistant provider
/// with emotion/intent folded into the system prompt.
#[axum::debug_handler]
pub async fn doctor_chat(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Message must be a non-empty string".to_string(),
        ));
    }

    if wants_references(&request.message) {
        return Ok(Json(json!({
            "message": CURATED_MEDICAL_RESOURCES
        })));
    }

    let client = OpenAiChatClient::new(&state).map_err(|_| {
        AppError::Internal("Doctor chat is not configured: OPENAI_API_KEY is missing".to_string())
    })?;

    let emotion = request
        .emotion
        .as_deref()
        .or_else(|| hints::detect_emotion(&request.message));
    let intent = request
        .intent
        .as_deref()
        .or_else(|| hints::detect_intent(&request.message));

    let reply = client
        .doctor_reply(&request.message, emotion, intent)
        .await
        .map_err(|e| match e {
            ChatProxyError::UpstreamStatus { status } => {
                AppError::ExternalService(format!("Chat provider returned HTTP {}", status))
            }
            ChatProxyError::EmptyCompletion => {
                AppError::Internal("Chat provider returned no completion choices".to_string())
            }
            _ => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(json!({
        "message": reply
    })))
}

/// Patient-facing chat proxy. Same provider as the doctor route, but hints
/// travel in a `user_context` body field and there is no reference
/// short-circuit.
#[axum::debug_handler]
pub async fn patient_chat(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Message must be a non-empty string".to_string(),
        ));
    }

    let client = OpenAiChatClient::new(&state).map_err(|_| {
        AppError::Internal("Patient chat is not configured: OPENAI_API_KEY is missing".to_string())
    })?;

    let emotion = request
        .emotion
        .as_deref()
        .or_else(|| hints::detect_emotion(&request.message));
    let intent = request
        .intent
        .as_deref()
        .or_else(|| hints::detect_intent(&request.message));

    let reply = client
        .patient_reply(&request.message, emotion, intent)
        .await
        .map_err(|e| match e {
            ChatProxyError::UpstreamStatus { status } => {
                AppError::ExternalService(format!("Chat provider returned HTTP {}", status))
            }
            ChatProxyError::EmptyCompletion => {
                AppError::Internal("Chat provider returned no completion choices".to_string())
            }
            _ => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(json!({
        "message": reply
    })))
}

// ==============================================================================
// GENERAL HEALTH CHAT HANDLERS
// ==============================================================================

/// General health chat proxy backed by the research provider. The body is
/// validated by hand so a missing or wrong-typed `message` yields 400 rather
/// than the extractor's 422.
#[axum::debug_handler]
pub async fn health_chat(
    State(state): State<Arc<AppConfig>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let message = match body.get("message").and_then(Value::as_str) {
        Some(message) if !message.trim().is_empty() => message.to_string(),
        _ => {
            return Err(AppError::BadRequest(
                "Message must be a non-empty string".to_string(),
            ));
        }
    };

    let client = PerplexityClient::new(&state).map_err(|_| {
        AppError::Internal("Health chat is not configured: PERPLEXITY_API is missing".to_string())
    })?;

    let content = client
        .research_reply(&message)
        .await
        .map_err(|e| match e {
            ChatProxyError::UpstreamStatus { status } => {
                AppError::ExternalService(format!("Research provider returned HTTP {}", status))
            }
            ChatProxyError::EmptyCompletion => {
                AppError::Internal("Research provider returned no completion choices".to_string())
            }
            _ => AppError::Internal(e.to_string()),
        })?;

    let extracted = payload::extract_payload(&content);
    let response_value = extracted.parsed.unwrap_or(Value::String(extracted.raw));

    Ok(Json(json!({
        "response": response_value
    })))
}

/// Static usage text for GET on the health chat route.
#[axum::debug_handler]
pub async fn health_chat_help() -> Json<Value> {
    Json(json!({
        "message": HEALTH_CHAT_HELP
    }))
}

// ==============================================================================
// SYSTEM HANDLERS
// ==============================================================================

/// Reports which providers are configured, without calling either.
#[axum::debug_handler]
pub async fn chat_health_check(State(state): State<Arc<AppConfig>>) -> Json<Value> {
    let assistant = state.is_assistant_configured();
    let research = state.is_research_configured();

    Json(json!({
        "status": if assistant && research { "healthy" } else { "not_configured" },
        "assistant_configured": assistant,
        "research_configured": research,
        "checked_at": chrono::Utc::now().to_rfc3339()
    }))
}

fn wants_references(message: &str) -> bool {
    let lowered = message.to_lowercase();
    lowered.contains("link") || lowered.contains("reference")
}

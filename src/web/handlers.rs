use crate::models::types::{ChatRequest, ChatResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use tracing::{error, info};

/// Fixed user-facing text for absorbed upstream failures.
const UPSTREAM_APOLOGY: &str = "I'm sorry, I'm having trouble connecting to the AI service \
     right now. Please try again later.";

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({"message": "AI Chat Service is running"}))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy", "service": "AI Chat Service"}))
}

/// Classifies a stringified generation error. Substring matching on
/// "api"/"quota" is kept for compatibility with the original service even
/// though an unrelated error mentioning either word gets absorbed too.
fn is_upstream_error(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("api") || lower.contains("quota")
}

fn internal_error(message: String) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"detail": message})),
    )
}

/// `POST /chat`: assemble the prompt, call the generation API, map the
/// outcome. Upstream failures come back as HTTP 200 with `status: "error"`;
/// everything else (including a missing credential) is HTTP 500.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<serde_json::Value>)> {
    let message_preview: String = request.message.chars().take(200).collect();
    info!(
        user_id = %request.user_id.as_deref().unwrap_or("anonymous"),
        history_len = request.history.len(),
        message = %message_preview,
        "chat: request received"
    );

    // Short-circuit before any prompt assembly or upstream call.
    if state.config.llm.api_key.is_none() {
        error!("chat: Gemini API key not configured");
        return Err(internal_error("Gemini API key not configured".to_string()));
    }

    match state.assistant.reply(&request).await {
        Ok(text) => Ok(Json(ChatResponse::success(text))),
        Err(e) => {
            let raw = e.to_string();
            if is_upstream_error(&raw) {
                error!(error = %raw, "chat: upstream service failure");
                Ok(Json(ChatResponse::upstream_error(
                    UPSTREAM_APOLOGY.to_string(),
                    raw,
                )))
            } else {
                error!(error = %raw, "chat: unexpected error");
                Err(internal_error(format!("Internal server error: {raw}")))
            }
        }
    }
}

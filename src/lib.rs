pub mod models;
pub mod services;
pub mod state;
pub mod traits;
pub mod web;

use std::sync::Arc;
use tracing::{error, info};

use crate::services::assistant::Assistant;
use crate::services::chat_api_gemini::GeminiChatApi;
use crate::services::settings::AppConfig;
use crate::state::AppState;
use crate::traits::chat_api::ChatApi;

/// High-level entrypoint: load config from the environment, init logging,
/// serve until shutdown.
pub async fn run_from_env(
    host_override: Option<String>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    let mut cfg = AppConfig::from_env()?;
    if let Some(host) = host_override {
        cfg.server.host = host;
    }
    if let Some(port) = port_override {
        cfg.server.port = port;
    }

    // Initialize structured logging (default to info if RUST_LOG not set)
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_target(false)
        .compact()
        .try_init();

    run(cfg).await
}

/// Builds the service from an explicit config and serves it. The service
/// starts even without a credential; `/chat` then answers 500 until one is
/// provided, matching the original behavior.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    info!(model = %cfg.llm.model, "starting AI Chat Service");

    let chat_api: Arc<dyn ChatApi> = match cfg.llm.api_key.clone() {
        Some(key) => Arc::new(GeminiChatApi::from_config(&cfg.llm, key)?),
        None => {
            error!("GEMINI_API_KEY not found in environment variables");
            Arc::new(UnconfiguredChatApi)
        }
    };

    let assistant = Assistant::new(chat_api, cfg.llm.log_prompt_preview_chars);
    let state = AppState::new(cfg, assistant);
    web::start_server(state).await
}

/// Stand-in used when no credential is configured. The chat handler
/// short-circuits before reaching it; this exists so the service can still
/// boot and answer the health endpoints.
struct UnconfiguredChatApi;

#[async_trait::async_trait]
impl ChatApi for UnconfiguredChatApi {
    async fn generate(
        &self,
        _prompt: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Err("Gemini API key not configured".into())
    }
}

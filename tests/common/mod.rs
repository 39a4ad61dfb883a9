use std::sync::Arc;

use ai_chat_service::services::assistant::Assistant;
use ai_chat_service::services::chat_api_gemini::GeminiChatApi;
use ai_chat_service::services::settings::{AppConfig, LlmConfig, ServerConfig};
use ai_chat_service::state::AppState;
use ai_chat_service::traits::chat_api::ChatApi;
use ai_chat_service::web::create_app;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_MODEL: &str = "gemini-2.0-flash";

pub fn gemini_path() -> String {
    format!("/v1beta/models/{TEST_MODEL}:generateContent")
}

pub fn test_config(base_url: &str, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        llm: LlmConfig {
            api_key: api_key.map(str::to_string),
            model: TEST_MODEL.to_string(),
            base_url: base_url.to_string(),
            max_output_tokens: 1000,
            temperature: 0.7,
            request_timeout_secs: 10,
            log_prompt_preview_chars: 200,
        },
    }
}

/// Serves the app against the real Gemini client (pointed at a mock server)
/// and returns its base URL.
pub async fn spawn_app(cfg: AppConfig) -> String {
    let key = cfg.llm.api_key.clone().unwrap_or_default();
    let chat_api: Arc<dyn ChatApi> =
        Arc::new(GeminiChatApi::from_config(&cfg.llm, key).unwrap());
    spawn_app_with_chat_api(cfg, chat_api).await
}

/// Serves the app with an injected `ChatApi` implementation.
pub async fn spawn_app_with_chat_api(cfg: AppConfig, chat_api: Arc<dyn ChatApi>) -> String {
    let assistant = Assistant::new(chat_api, cfg.llm.log_prompt_preview_chars);
    let state = AppState::new(cfg, assistant);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn mount_gemini_generate(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        })))
        .mount(server)
        .await;
}

pub async fn mount_gemini_failure(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(gemini_path()))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Extracts the prompt text the service sent to the mocked Gemini endpoint.
pub async fn sent_prompt(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one upstream call");
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .to_string()
}

use crate::services::settings::LlmConfig;
use crate::traits::chat_api::ChatApi;
use async_trait::async_trait;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Client for the Gemini `generateContent` REST endpoint.
///
/// The base URL is configurable so tests can point the client at a local
/// mock server; the production default targets
/// `https://generativelanguage.googleapis.com`.
#[derive(Builder)]
pub struct GeminiChatApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_output_tokens: u32,
    temperature: f32,
    preview_chars: usize,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiChatApi {
    pub fn from_config(llm: &LlmConfig, api_key: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(llm.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: llm.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: llm.model.clone(),
            max_output_tokens: llm.max_output_tokens,
            temperature: llm.temperature,
            preview_chars: llm.log_prompt_preview_chars,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl ChatApi for GeminiChatApi {
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let prompt_preview: String = prompt.chars().take(self.preview_chars).collect();
        info!(
            model = %self.model,
            prompt_len = prompt.len(),
            prompt_preview = %prompt_preview,
            "gemini: generate request"
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
                temperature: self.temperature,
            },
        };

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Gemini API request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            return Err(format!("Gemini API error: HTTP {status}: {detail}").into());
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| format!("Gemini API returned malformed JSON: {e}"))?;

        let text = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .filter(|t| !t.is_empty())
            .ok_or("Gemini API returned no candidates")?;

        let response_preview: String = text.chars().take(100).collect();
        info!(
            model = %self.model,
            response_len = text.len(),
            response_preview = %response_preview,
            "gemini: generate response"
        );
        Ok(text)
    }
}

use std::sync::Arc;

use crate::models::types::{ChatRequest, ChatTurn};
use crate::traits::chat_api::ChatApi;
use tracing::{debug, info};

/// Used when the request carries no `system_prompt`.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant that answers questions \
     based on provided context. If search context is provided, use it to give accurate and \
     detailed answers. If no context is provided or it's not relevant, provide helpful responses \
     based on your knowledge. Be conversational and friendly.";

/// Only the most recent turns of the history make it into the prompt.
const HISTORY_LIMIT: usize = 10;

/// Service that wraps `ChatApi` and turns a chat request into a single
/// flat prompt: system prompt first, then the tagged conversation history,
/// then the current message (with the search context folded in when
/// present), joined by blank lines.
pub struct Assistant {
    chat_api: Arc<dyn ChatApi>,
    preview_chars: usize,
}

impl Assistant {
    pub fn new(chat_api: Arc<dyn ChatApi>, preview_chars: usize) -> Self {
        Self {
            chat_api,
            preview_chars,
        }
    }

    fn role_tag(turn: &ChatTurn) -> &'static str {
        if turn.role == "user" { "Human" } else { "Assistant" }
    }

    pub fn build_prompt(&self, request: &ChatRequest) -> String {
        let system_prompt = request
            .system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_PROMPT);

        let mut parts: Vec<String> = Vec::with_capacity(request.history.len() + 2);
        parts.push(format!("System: {system_prompt}"));

        let tail_start = request.history.len().saturating_sub(HISTORY_LIMIT);
        for turn in &request.history[tail_start..] {
            parts.push(format!("{}: {}", Self::role_tag(turn), turn.content));
        }

        let current = match request.search_context.as_deref().filter(|c| !c.is_empty()) {
            Some(context) => format!(
                "Question: {}\n\nSearch Context:\n{}\n\nPlease answer the question using the \
                 provided search context when relevant.",
                request.message, context
            ),
            None => request.message.clone(),
        };
        parts.push(format!("Human: {current}"));

        parts.join("\n\n")
    }

    /// Assembles the prompt and runs it through the generation API.
    pub async fn reply(
        &self,
        request: &ChatRequest,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let prompt = self.build_prompt(request);
        debug!(prompt_len = prompt.len(), "chat: prompt built");
        let preview: String = prompt.chars().take(self.preview_chars).collect();
        info!(prompt_preview = %preview, "chat: sending prompt");
        let text = self.chat_api.generate(&prompt).await?;
        let response_preview: String = text.chars().take(100).collect();
        info!(response_preview = %response_preview, "chat: received response");
        Ok(text)
    }
}

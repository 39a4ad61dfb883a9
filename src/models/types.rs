use serde::{Deserialize, Serialize};

/// One message of a conversation, attributed to a role.
///
/// The role is kept as a free-form string rather than an enum: the service
/// maps `"user"` to the Human tag and every other value to the Assistant
/// tag, so unknown roles must survive deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    #[serde(default)]
    pub search_context: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Body returned by `POST /chat`.
///
/// An absorbed upstream failure still travels as HTTP 200; callers must
/// branch on `status`, with `error` carrying the raw diagnostic text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn success(response: String) -> Self {
        Self {
            response,
            status: ResponseStatus::Success,
            error: None,
        }
    }

    pub fn upstream_error(response: String, error: String) -> Self {
        Self {
            response,
            status: ResponseStatus::Error,
            error: Some(error),
        }
    }
}

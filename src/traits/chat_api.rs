use async_trait::async_trait;

/// Defines the interface for a text-generation API (e.g., Gemini).
///
/// This trait allows consumers to abstract over different backend
/// implementations (e.g., real HTTP clients, mocks for testing).
///
/// Any implementation must be thread-safe (`Send + Sync`). The error stays a
/// boxed `std::error::Error` so callers can classify failures on the
/// stringified message.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Sends a fully assembled prompt and returns the generated text.
    async fn generate(
        &self,
        prompt: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

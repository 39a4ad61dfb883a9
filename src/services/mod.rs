pub mod assistant;
pub mod chat_api_gemini;
pub mod settings;

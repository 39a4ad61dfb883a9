use crate::services::assistant::Assistant;
use crate::services::settings::AppConfig;
use std::sync::Arc;

/// Shared handler state. Everything inside is immutable once built; no
/// state crosses requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub assistant: Arc<Assistant>,
}

impl AppState {
    pub fn new(config: AppConfig, assistant: Assistant) -> Self {
        Self {
            config: Arc::new(config),
            assistant: Arc::new(assistant),
        }
    }
}

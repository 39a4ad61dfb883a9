use std::env;

pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Process-wide configuration, read once at startup and passed explicitly to
/// the handlers. Nothing reads the environment after this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Gemini API key. Absent means startup succeeds but every `/chat`
    /// call fails with HTTP 500.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub request_timeout_secs: u64,
    /// How many characters of the outbound prompt to log.
    pub log_prompt_preview_chars: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(AppConfig {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8001".to_string())
                    .parse()?,
            },
            llm: LlmConfig {
                api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                base_url: env::var("GEMINI_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
                max_output_tokens: env::var("GEMINI_MAX_OUTPUT_TOKENS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()?,
                temperature: env::var("GEMINI_TEMPERATURE")
                    .unwrap_or_else(|_| "0.7".to_string())
                    .parse()?,
                request_timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "120".to_string())
                    .parse()?,
                log_prompt_preview_chars: env::var("LOG_PROMPT_PREVIEW_CHARS")
                    .unwrap_or_else(|_| "200".to_string())
                    .parse()?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "HOST",
            "PORT",
            "GEMINI_API_KEY",
            "GEMINI_MODEL",
            "GEMINI_BASE_URL",
            "GEMINI_MAX_OUTPUT_TOKENS",
            "GEMINI_TEMPERATURE",
            "GEMINI_TIMEOUT_SECS",
            "LOG_PROMPT_PREVIEW_CHARS",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_when_env_is_empty() {
        clear_env();
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8001);
        assert_eq!(cfg.llm.api_key, None);
        assert_eq!(cfg.llm.model, DEFAULT_MODEL);
        assert_eq!(cfg.llm.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.llm.max_output_tokens, 1000);
        assert_eq!(cfg.llm.temperature, 0.7);
        assert_eq!(cfg.llm.log_prompt_preview_chars, 200);
    }

    #[test]
    #[serial]
    fn env_overrides_are_read() {
        clear_env();
        unsafe {
            env::set_var("HOST", "127.0.0.1");
            env::set_var("PORT", "9100");
            env::set_var("GEMINI_API_KEY", "test-key");
            env::set_var("GEMINI_MODEL", "gemini-2.0-flash");
        }
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.llm.api_key.as_deref(), Some("test-key"));
        assert_eq!(cfg.llm.model, "gemini-2.0-flash");
        clear_env();
    }

    #[test]
    #[serial]
    fn empty_api_key_counts_as_absent() {
        clear_env();
        unsafe { env::set_var("GEMINI_API_KEY", "") };
        let cfg = AppConfig::from_env().unwrap();
        assert_eq!(cfg.llm.api_key, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_port_is_an_error() {
        clear_env();
        unsafe { env::set_var("PORT", "not-a-port") };
        assert!(AppConfig::from_env().is_err());
        clear_env();
    }
}

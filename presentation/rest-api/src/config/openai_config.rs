/// Configuration errors that must stop the service from coming up.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.openai_api_key_missing")]
    MissingOpenAIKey,
}

/// Configuration for OpenAI API access.
pub struct OpenAIConfig {
    pub api_key: String,
}

impl OpenAIConfig {
    /// Reads the server-held credential. The relay must not serve traffic
    /// without it, so a missing or empty key fails startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var("OPENAI_API_KEY").ok())
    }

    fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(api_key) if !api_key.trim().is_empty() => Ok(Self { api_key }),
            _ => Err(ConfigError::MissingOpenAIKey),
        }
    }
}

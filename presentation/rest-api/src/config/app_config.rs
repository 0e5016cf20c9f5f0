use super::{openai_config::OpenAIConfig, server_config::ServerConfig};

/// Process-wide configuration, read once from the environment at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub openai: OpenAIConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            openai: OpenAIConfig::from_env(),
        }
    }
}

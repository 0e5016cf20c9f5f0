use business::domain::chat::model::{DEFAULT_MODEL, ModelConfig};
use openai::client::DEFAULT_BASE_URL;

/// Configuration for OpenAI API access.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub model: ModelConfig,
    pub base_url: String,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_API_KEY: Provider credential. Missing or empty is accepted here;
    ///   chat requests fail until it is set.
    /// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("OPENAI_API_KEY").ok(),
            std::env::var("OPENAI_BASE_URL").ok(),
        )
    }

    pub fn from_values(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            model: ModelConfig::new(DEFAULT_MODEL, api_key),
            base_url: base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

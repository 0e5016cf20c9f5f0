use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Shared OpenAI HTTP client configuration.
///
/// No request timeout is set; calls wait as long as the provider takes.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl OpenAIClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds the authorization header value, if a key was configured.
    pub fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

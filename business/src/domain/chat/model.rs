/// Model queried for every question.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// A question submitted by a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Question(String);

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Model identifier and provider credential, fixed at startup.
///
/// The credential is optional: an absent key is only reported when a
/// completion is requested.
#[derive(Clone, PartialEq)]
pub struct ModelConfig {
    pub model: String,
    pub api_key: Option<String>,
}

impl ModelConfig {
    pub fn new(model: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            model: model.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Raw text returned by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResult {
    pub text: String,
}

impl CompletionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Errors raised while answering a question.
/// Messages start with a code-style identifier for i18n compatibility; the
/// rest is diagnostic detail for logs.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.missing_credential")]
    MissingCredential,
    #[error("chat.authentication_failed: provider returned {status}")]
    Authentication { status: u16 },
    #[error("chat.connection_failed: {0}")]
    Connection(String),
    #[error("chat.provider_error: provider returned {status}")]
    Provider { status: u16 },
    #[error("chat.invalid_response: {0}")]
    InvalidResponse(String),
    #[error("prompt.render_failed: {0}")]
    Prompt(#[from] PromptError),
}

impl ChatError {
    /// The code-style identifier, without diagnostic detail.
    pub fn code(&self) -> &'static str {
        match self {
            ChatError::MissingCredential => "chat.missing_credential",
            ChatError::Authentication { .. } => "chat.authentication_failed",
            ChatError::Connection(_) => "chat.connection_failed",
            ChatError::Provider { .. } => "chat.provider_error",
            ChatError::InvalidResponse(_) => "chat.invalid_response",
            ChatError::Prompt(_) => "prompt.render_failed",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("{0}")]
    Render(#[from] minijinja::Error),
}

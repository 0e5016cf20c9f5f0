use async_trait::async_trait;

use super::errors::ChatError;
use super::model::CompletionResult;

/// Service port for submitting a rendered prompt to a hosted model.
///
/// One call is one outbound request. Implementations do not retry.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<CompletionResult, ChatError>;
}

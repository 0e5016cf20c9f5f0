use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::{CompletionResult, Question};

#[derive(Debug)]
pub struct AskQuestionParams {
    pub question: Question,
}

#[async_trait]
pub trait AskQuestionUseCase: Send + Sync {
    async fn execute(&self, params: AskQuestionParams) -> Result<CompletionResult, ChatError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::CompletionResult;
use crate::domain::chat::prompt::PromptTemplate;
use crate::domain::chat::services::CompletionService;
use crate::domain::chat::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};
use crate::domain::logger::Logger;

pub struct AskQuestionUseCaseImpl {
    pub template: Arc<PromptTemplate>,
    pub completion: Arc<dyn CompletionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AskQuestionUseCase for AskQuestionUseCaseImpl {
    async fn execute(&self, params: AskQuestionParams) -> Result<CompletionResult, ChatError> {
        let prompt = self.template.render_question(&params.question)?;
        self.logger.debug(&format!("Rendered prompt: {:?}", prompt));

        match self.completion.complete(&prompt).await {
            Ok(result) => {
                self.logger.info(&format!(
                    "Completion received ({} chars)",
                    result.text.chars().count()
                ));
                Ok(result)
            }
            Err(err) => {
                self.logger.error(&format!("Completion failed: {}", err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::model::Question;
    use mockall::mock;

    mock! {
        pub Completion {}

        #[async_trait]
        impl CompletionService for Completion {
            async fn complete(&self, prompt: &str) -> Result<CompletionResult, ChatError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case(completion: MockCompletion) -> AskQuestionUseCaseImpl {
        AskQuestionUseCaseImpl {
            template: Arc::new(PromptTemplate::question_answer().unwrap()),
            completion: Arc::new(completion),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_send_rendered_prompt_exactly_once() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .withf(|prompt| prompt.to_string() == "질문: What is the capital of France?\n답변:")
            .times(1)
            .returning(|_| Ok(CompletionResult::new("Paris.")));

        let result = use_case(mock_completion)
            .execute(AskQuestionParams {
                question: Question::new("What is the capital of France?"),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().text, "Paris.");
    }

    #[tokio::test]
    async fn should_return_model_text_unmodified() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .returning(|_| Ok(CompletionResult::new("  line one\nline two  ")));

        let result = use_case(mock_completion)
            .execute(AskQuestionParams {
                question: Question::new("hello"),
            })
            .await;

        assert_eq!(result.unwrap().text, "  line one\nline two  ");
    }

    #[tokio::test]
    async fn should_fail_when_credential_missing() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .times(1)
            .returning(|_| Err(ChatError::MissingCredential));

        let result = use_case(mock_completion)
            .execute(AskQuestionParams {
                question: Question::new("hello"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ChatError::MissingCredential));
    }

    #[tokio::test]
    async fn should_propagate_connection_error_without_retry() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .times(1)
            .returning(|_| Err(ChatError::Connection("connection refused".to_string())));

        let result = use_case(mock_completion)
            .execute(AskQuestionParams {
                question: Question::new("hello"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ChatError::Connection(_)));
    }

    #[tokio::test]
    async fn should_log_failure_cause() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .returning(|_| Err(ChatError::Provider { status: 429 }));

        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.contains("chat.provider_error") && message.contains("429"))
            .times(1)
            .returning(|_| ());

        let use_case = AskQuestionUseCaseImpl {
            template: Arc::new(PromptTemplate::question_answer().unwrap()),
            completion: Arc::new(mock_completion),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(AskQuestionParams {
                question: Question::new("hello"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ChatError::Provider { status: 429 }
        ));
    }

    #[tokio::test]
    async fn should_not_call_model_when_prompt_cannot_render() {
        let mut mock_completion = MockCompletion::new();
        mock_completion.expect_complete().never();

        let use_case = AskQuestionUseCaseImpl {
            template: Arc::new(PromptTemplate::from_template("{{ topic }}: {{ question }}").unwrap()),
            completion: Arc::new(mock_completion),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AskQuestionParams {
                question: Question::new("hello"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ChatError::Prompt(_)));
    }

    #[tokio::test]
    async fn should_answer_concurrent_questions_independently() {
        let mut mock_completion = MockCompletion::new();
        mock_completion
            .expect_complete()
            .times(2)
            .returning(|prompt| Ok(CompletionResult::new(format!("echo: {}", prompt))));

        let use_case = Arc::new(use_case(mock_completion));
        let first = {
            let use_case = use_case.clone();
            tokio::spawn(async move {
                use_case
                    .execute(AskQuestionParams {
                        question: Question::new("first"),
                    })
                    .await
            })
        };
        let second = {
            let use_case = use_case.clone();
            tokio::spawn(async move {
                use_case
                    .execute(AskQuestionParams {
                        question: Question::new("second"),
                    })
                    .await
            })
        };

        let first = first.await.unwrap().unwrap();
        let second = second.await.unwrap().unwrap();
        assert_eq!(first.text, "echo: 질문: first\n답변:");
        assert_eq!(second.text, "echo: 질문: second\n답변:");
    }
}

use std::sync::Arc;

use logger::TracingLogger;

use openai::chat_completion::ChatCompletionOpenAI;
use openai::client::OpenAIClient;

use business::application::chat::ask::AskQuestionUseCaseImpl;
use business::domain::chat::prompt::PromptTemplate;
use business::domain::logger::Logger;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub chat_api: crate::api::chat::routes::ChatApi,
}

impl DependencyContainer {
    pub fn new(openai_config: &OpenAIConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        if !openai_config.model.has_credential() {
            logger.warn("OPENAI_API_KEY is not set; chat requests will fail");
        }
        logger.info(&format!(
            "Using model {} at {}",
            openai_config.model.model, openai_config.base_url
        ));

        // Infrastructure adapters
        let openai_client = OpenAIClient::with_base_url(
            openai_config.model.api_key.clone(),
            openai_config.base_url.clone(),
        );
        let completion = Arc::new(ChatCompletionOpenAI::new(
            openai_client,
            openai_config.model.model.clone(),
        ));

        // Chat use cases
        let ask_use_case = Arc::new(AskQuestionUseCaseImpl {
            template: Arc::new(PromptTemplate::question_answer()?),
            completion,
            logger,
        });

        let chat_api = crate::api::chat::routes::ChatApi::new(ask_use_case);

        Ok(Self {
            health_api,
            chat_api,
        })
    }
}

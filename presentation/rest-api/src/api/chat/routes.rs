use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::{CompletionResult, Question};
use business::domain::chat::use_cases::ask::{AskQuestionParams, AskQuestionUseCase};

use crate::api::chat::dto::{ChatOutputResponse, InvokeRequest, InvokeResponse, QuestionRequest};
use crate::api::chat::schema;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    ask_use_case: Arc<dyn AskQuestionUseCase>,
}

impl ChatApi {
    pub fn new(ask_use_case: Arc<dyn AskQuestionUseCase>) -> Self {
        Self { ask_use_case }
    }

    async fn ask(&self, question: Question) -> Result<CompletionResult, ChatError> {
        self.ask_use_case
            .execute(AskQuestionParams { question })
            .await
    }
}

/// Chat API
///
/// Forwards a question to the hosted model and returns its answer.
#[OpenApi]
impl ChatApi {
    /// Ask a question
    ///
    /// Renders the question into the prompt `질문: {question}\n답변:`, sends it
    /// to the model once and returns the answer text unmodified.
    #[oai(path = "/chat", method = "post", tag = "ApiTags::Chat")]
    async fn chat(&self, body: Json<QuestionRequest>) -> ChatResponse {
        match self.ask(body.0.question.into()).await {
            Ok(result) => ChatResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => ChatResponse::BadGateway(json),
                    _ => ChatResponse::InternalError(json),
                }
            }
        }
    }

    /// Invoke the pipeline
    ///
    /// Same as `POST /chat`, wrapped in an `input`/`output` envelope with a
    /// per-call `run_id`. `input` is the question string itself or
    /// `{"question": "..."}`. `config` is accepted and ignored.
    #[oai(path = "/chat/invoke", method = "post", tag = "ApiTags::Chat")]
    async fn invoke(&self, body: Json<InvokeRequest>) -> InvokeApiResponse {
        match self.ask(body.0.input.into()).await {
            Ok(result) => InvokeApiResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => InvokeApiResponse::BadGateway(json),
                    _ => InvokeApiResponse::InternalError(json),
                }
            }
        }
    }

    /// Input schema
    #[oai(path = "/chat/input_schema", method = "get", tag = "ApiTags::Chat")]
    async fn input_schema(&self) -> Json<serde_json::Value> {
        Json(schema::input_schema())
    }

    /// Output schema
    #[oai(path = "/chat/output_schema", method = "get", tag = "ApiTags::Chat")]
    async fn output_schema(&self) -> Json<serde_json::Value> {
        Json(schema::output_schema())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ChatResponse {
    #[oai(status = 200)]
    Ok(Json<ChatOutputResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum InvokeApiResponse {
    #[oai(status = 200)]
    Ok(Json<InvokeResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

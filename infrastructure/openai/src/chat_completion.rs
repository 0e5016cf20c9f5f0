use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::CompletionResult;
use business::domain::chat::services::CompletionService;

use crate::client::OpenAIClient;

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

// reqwest's Display omits the underlying cause (refused, DNS, TLS).
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Sends a rendered prompt as a single user message to the chat completions API.
pub struct ChatCompletionOpenAI {
    client: OpenAIClient,
    model: String,
}

impl ChatCompletionOpenAI {
    pub fn new(client: OpenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    fn build_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt},
            ],
        })
    }

    fn map_status(status: StatusCode) -> ChatError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ChatError::Authentication {
                status: status.as_u16(),
            },
            _ => ChatError::Provider {
                status: status.as_u16(),
            },
        }
    }

    fn parse_response(body: &str) -> Result<CompletionResult, ChatError> {
        let data: ChatCompletionResponse =
            serde_json::from_str(body).map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(CompletionResult::new)
            .ok_or_else(|| ChatError::InvalidResponse("no completion text in response".to_string()))
    }
}

#[async_trait]
impl CompletionService for ChatCompletionOpenAI {
    async fn complete(&self, prompt: &str) -> Result<CompletionResult, ChatError> {
        let auth_header = self
            .client
            .auth_header()
            .ok_or(ChatError::MissingCredential)?;

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", auth_header)
            .json(&self.build_body(prompt))
            .send()
            .await
            .map_err(|e| ChatError::Connection(describe(&e)))?;

        if !response.status().is_success() {
            return Err(Self::map_status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Connection(describe(&e)))?;

        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(api_key: Option<&str>, base_url: &str) -> ChatCompletionOpenAI {
        ChatCompletionOpenAI::new(
            OpenAIClient::with_base_url(api_key.map(str::to_string), base_url),
            "gpt-3.5-turbo",
        )
    }

    #[test]
    fn should_send_prompt_as_single_user_message() {
        let body = generator(Some("sk-test"), "http://localhost")
            .build_body("질문: What is the capital of France?\n답변:");

        assert_eq!(body["model"], "gpt-3.5-turbo");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(
            messages[0]["content"],
            "질문: What is the capital of France?\n답변:"
        );
        assert!(body.get("stream").is_none());
    }

    #[test]
    fn should_extract_first_choice_content_verbatim() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Paris.\n"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "Lyon"}, "finish_reason": "stop"}
            ]
        }"#;

        let result = ChatCompletionOpenAI::parse_response(body).unwrap();
        assert_eq!(result.text, "Paris.\n");
    }

    #[test]
    fn should_fail_when_no_choices_returned() {
        let result = ChatCompletionOpenAI::parse_response(r#"{"choices": []}"#);
        assert!(matches!(result, Err(ChatError::InvalidResponse(_))));
    }

    #[test]
    fn should_fail_when_content_is_null() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let result = ChatCompletionOpenAI::parse_response(body);
        assert!(matches!(result, Err(ChatError::InvalidResponse(_))));
    }

    #[test]
    fn should_fail_when_body_is_not_json() {
        let result = ChatCompletionOpenAI::parse_response("<html>bad gateway</html>");
        assert!(matches!(result, Err(ChatError::InvalidResponse(_))));
    }

    #[test]
    fn should_map_rejected_credentials_to_authentication_error() {
        assert!(matches!(
            ChatCompletionOpenAI::map_status(StatusCode::UNAUTHORIZED),
            ChatError::Authentication { status: 401 }
        ));
        assert!(matches!(
            ChatCompletionOpenAI::map_status(StatusCode::FORBIDDEN),
            ChatError::Authentication { status: 403 }
        ));
    }

    #[test]
    fn should_map_other_failures_to_provider_error() {
        assert!(matches!(
            ChatCompletionOpenAI::map_status(StatusCode::TOO_MANY_REQUESTS),
            ChatError::Provider { status: 429 }
        ));
        assert!(matches!(
            ChatCompletionOpenAI::map_status(StatusCode::INTERNAL_SERVER_ERROR),
            ChatError::Provider { status: 500 }
        ));
    }

    #[tokio::test]
    async fn should_fail_without_credential_before_sending() {
        // Unroutable address: reaching the network would surface as Connection instead.
        let result = generator(None, "http://127.0.0.1:1")
            .complete("질문: hi\n답변:")
            .await;

        assert!(matches!(result, Err(ChatError::MissingCredential)));
    }

    #[tokio::test]
    async fn should_report_connection_error_when_endpoint_unreachable() {
        let result = generator(Some("sk-test"), "http://127.0.0.1:1")
            .complete("질문: hi\n답변:")
            .await;

        assert!(matches!(result, Err(ChatError::Connection(ref cause)) if !cause.is_empty()));
    }
}

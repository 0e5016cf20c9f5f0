use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::chat::errors::ChatError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ChatError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            ChatError::MissingCredential | ChatError::Authentication { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "AuthenticationError")
            }
            ChatError::Connection(_) => (StatusCode::BAD_GATEWAY, "ConnectionError"),
            ChatError::Provider { .. } | ChatError::InvalidResponse(_) => {
                (StatusCode::BAD_GATEWAY, "ProviderError")
            }
            ChatError::Prompt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.code().to_string(),
            }),
        )
    }
}

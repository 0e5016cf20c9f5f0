use std::borrow::Cow;

use poem_openapi::registry::{MetaSchema, MetaSchemaRef};
use poem_openapi::types::{ParseError, ParseFromJSON, ParseResult, ToJSON, Type};
use poem_openapi::Object;
use serde_json::Value;
use uuid::Uuid;

use business::domain::chat::model::{CompletionResult, Question};

/// Question text that only accepts a JSON string.
///
/// Numbers and booleans are rejected instead of being stringified.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionText(pub String);

impl From<QuestionText> for Question {
    fn from(text: QuestionText) -> Self {
        Question::new(text.0)
    }
}

impl Type for QuestionText {
    const IS_REQUIRED: bool = true;

    type RawValueType = Self;

    type RawElementValueType = Self;

    fn name() -> Cow<'static, str> {
        "string".into()
    }

    fn schema_ref() -> MetaSchemaRef {
        MetaSchemaRef::Inline(Box::new(MetaSchema::new("string")))
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(self)
    }

    fn raw_element_iter<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = &'a Self::RawElementValueType> + 'a> {
        Box::new(self.as_raw_value().into_iter())
    }
}

impl ParseFromJSON for QuestionText {
    fn parse_from_json(value: Option<Value>) -> ParseResult<Self> {
        match value.unwrap_or_default() {
            Value::String(text) => Ok(Self(text)),
            other => Err(ParseError::expected_type(other)),
        }
    }
}

impl ToJSON for QuestionText {
    fn to_json(&self) -> Option<Value> {
        Some(Value::String(self.0.clone()))
    }
}

/// Body accepted by `POST /chat`.
#[derive(Debug, Clone, Object)]
pub struct QuestionRequest {
    /// Question forwarded to the model
    pub question: QuestionText,
}

/// Model answer, passed through verbatim.
#[derive(Debug, Clone, Object)]
pub struct ChatOutputResponse {
    pub output: String,
}

impl From<CompletionResult> for ChatOutputResponse {
    fn from(result: CompletionResult) -> Self {
        Self {
            output: result.text,
        }
    }
}

/// Input of `POST /chat/invoke`: either the bare question string or
/// `{"question": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeInput(pub QuestionText);

impl From<InvokeInput> for Question {
    fn from(input: InvokeInput) -> Self {
        input.0.into()
    }
}

impl Type for InvokeInput {
    const IS_REQUIRED: bool = true;

    type RawValueType = Self;

    type RawElementValueType = Self;

    fn name() -> Cow<'static, str> {
        "InvokeInput".into()
    }

    fn schema_ref() -> MetaSchemaRef {
        let object = MetaSchema {
            ty: "object",
            required: vec!["question"],
            properties: vec![("question", QuestionText::schema_ref())],
            ..MetaSchema::ANY
        };
        MetaSchemaRef::Inline(Box::new(MetaSchema {
            any_of: vec![
                QuestionText::schema_ref(),
                MetaSchemaRef::Inline(Box::new(object)),
            ],
            ..MetaSchema::ANY
        }))
    }

    fn as_raw_value(&self) -> Option<&Self::RawValueType> {
        Some(self)
    }

    fn raw_element_iter<'a>(
        &'a self,
    ) -> Box<dyn Iterator<Item = &'a Self::RawElementValueType> + 'a> {
        Box::new(self.as_raw_value().into_iter())
    }
}

impl ParseFromJSON for InvokeInput {
    fn parse_from_json(value: Option<Value>) -> ParseResult<Self> {
        match value.unwrap_or_default() {
            Value::String(text) => Ok(Self(QuestionText(text))),
            Value::Object(mut fields) => QuestionText::parse_from_json(fields.remove("question"))
                .map(Self)
                .map_err(ParseError::propagate),
            other => Err(ParseError::expected_type(other)),
        }
    }
}

impl ToJSON for InvokeInput {
    fn to_json(&self) -> Option<Value> {
        self.0.to_json()
    }
}

/// Per-call options. Accepted for compatibility; nothing is configurable.
#[derive(Debug, Clone, Object)]
pub struct InvokeConfig {
    #[oai(skip_serializing_if_is_none)]
    pub configurable: Option<Value>,
}

/// Body accepted by `POST /chat/invoke`.
#[derive(Debug, Clone, Object)]
pub struct InvokeRequest {
    pub input: InvokeInput,
    #[oai(skip_serializing_if_is_none)]
    pub config: Option<InvokeConfig>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct InvokeMetadata {
    /// Identifier of this invocation
    pub run_id: Uuid,
}

#[derive(Debug, Clone, Object)]
pub struct InvokeResponse {
    pub output: String,
    pub metadata: InvokeMetadata,
}

impl From<CompletionResult> for InvokeResponse {
    fn from(result: CompletionResult) -> Self {
        Self {
            output: result.text,
            metadata: InvokeMetadata {
                run_id: Uuid::new_v4(),
            },
        }
    }
}

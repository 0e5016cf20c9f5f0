use serde_json::{Value, json};

fn question_object_schema() -> Value {
    json!({
        "title": "QuestionRequest",
        "type": "object",
        "properties": {
            "question": {"title": "Question", "type": "string"}
        },
        "required": ["question"]
    })
}

/// JSON Schema of the pipeline input: the question string itself, or
/// `{"question": "..."}` as posted to `/chat`.
pub fn input_schema() -> Value {
    json!({
        "title": "ChatInput",
        "anyOf": [
            {"type": "string"},
            question_object_schema()
        ]
    })
}

/// JSON Schema of the pipeline output.
pub fn output_schema() -> Value {
    json!({
        "title": "ChatOutput",
        "type": "object",
        "properties": {
            "output": {"title": "Output", "type": "string"}
        },
        "required": ["output"]
    })
}

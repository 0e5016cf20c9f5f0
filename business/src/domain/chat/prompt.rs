use minijinja::{Environment, UndefinedBehavior, Value, context};

use super::errors::PromptError;
use super::model::Question;

/// Template used to turn a question into the prompt sent to the model.
pub const QUESTION_TEMPLATE: &str = "질문: {{ question }}\n답변:";

const TEMPLATE_NAME: &str = "prompt";

/// A prompt rendered with minijinja.
///
/// Undefined variables are errors. Substituted values are inserted as-is and
/// never re-parsed, so template syntax inside a question is harmless.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    environment: Environment<'static>,
}

impl PromptTemplate {
    pub fn from_template(source: &'static str) -> Result<Self, PromptError> {
        let mut environment = Environment::new();
        environment.set_undefined_behavior(UndefinedBehavior::Strict);
        environment.set_keep_trailing_newline(true);
        environment.add_template(TEMPLATE_NAME, source)?;
        Ok(Self { environment })
    }

    /// The fixed question/answer template.
    pub fn question_answer() -> Result<Self, PromptError> {
        Self::from_template(QUESTION_TEMPLATE)
    }

    pub fn render(&self, variables: Value) -> Result<String, PromptError> {
        let template = self.environment.get_template(TEMPLATE_NAME)?;
        Ok(template.render(variables)?)
    }

    pub fn render_question(&self, question: &Question) -> Result<String, PromptError> {
        self.render(context! { question => question.as_str() })
    }
}

use serde::{Deserialize, Serialize};

/// Вопрос пользователя к активному документу
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskQuestionRequest {
    pub question: String,
}

impl AskQuestionRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// The agent's verdict on a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub is_correct: bool,
    pub message: String,
    pub explanation: String,
}

impl Feedback {
    #[must_use]
    pub fn new(is_correct: bool, message: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            is_correct,
            message: message.into(),
            explanation: explanation.into(),
        }
    }
}

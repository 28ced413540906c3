//! JSON envelope returned by the agent's invoke endpoint.

use serde::{Deserialize, Serialize};
use trivia_core::model::{Feedback, GameState, Question, Score};

use crate::agent::AgentReply;
use crate::error::AgentError;

const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Serialize)]
pub(crate) struct InvokeRequest<'a> {
    pub input: &'a str,
    pub agent_id: &'a str,
    pub options: InvokeOptions<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InvokeOptions<'a> {
    pub session_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InvokeEnvelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    response: Option<InvokeResponse>,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    status: String,
    #[serde(default)]
    result: Option<GameResult>,
}

#[derive(Debug, Deserialize)]
struct GameResult {
    game_state: GameState,
    #[serde(default)]
    question: Option<QuestionPayload>,
    #[serde(default)]
    feedback: Option<FeedbackPayload>,
    #[serde(default)]
    score: Option<ScorePayload>,
    #[serde(default)]
    commentary: Option<String>,
}

// Agents fill the whole schema on every turn, so any field may be blank.
#[derive(Debug, Deserialize)]
struct QuestionPayload {
    #[serde(default, alias = "question")]
    text: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default, alias = "answer")]
    correct_answer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FeedbackPayload {
    #[serde(default)]
    is_correct: Option<bool>,
    #[serde(default, alias = "result")]
    message: String,
    #[serde(default)]
    explanation: String,
}

// `percentage` may be present; it is recomputed from the counts.
#[derive(Debug, Deserialize)]
struct ScorePayload {
    #[serde(default)]
    correct: u32,
    #[serde(default)]
    total: u32,
}

impl QuestionPayload {
    fn into_question(self) -> Result<Question, AgentError> {
        Question::new(self.text, self.options, self.correct_answer.as_deref())
            .map_err(|err| AgentError::malformed(err.to_string()))
    }
}

impl FeedbackPayload {
    fn into_feedback(self) -> Result<Feedback, AgentError> {
        let is_correct = self
            .is_correct
            .ok_or_else(|| AgentError::malformed("feedback without is_correct"))?;
        Ok(Feedback::new(is_correct, self.message, self.explanation))
    }
}

impl InvokeEnvelope {
    pub(crate) fn into_reply(self) -> Result<AgentReply, AgentError> {
        if !self.success {
            let message = self
                .error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| "agent call failed".to_string());
            return Err(AgentError::Rejected(message));
        }

        let response = self
            .response
            .ok_or_else(|| AgentError::malformed("missing response"))?;
        if response.status != SUCCESS_STATUS {
            return Err(AgentError::Status(response.status));
        }
        let result = response
            .result
            .ok_or_else(|| AgentError::malformed("missing result"))?;

        // Only payloads the declared state uses are validated. A feedback turn
        // may still carry the question it grades.
        let (question, feedback) = match result.game_state {
            GameState::Question => (
                result.question.map(QuestionPayload::into_question).transpose()?,
                None,
            ),
            GameState::Feedback => (
                result.question.and_then(|payload| payload.into_question().ok()),
                result.feedback.map(FeedbackPayload::into_feedback).transpose()?,
            ),
            GameState::Setup | GameState::GameOver => (None, None),
        };
        let score = result
            .score
            .map(|payload| Score::new(payload.correct, payload.total));
        let commentary = result
            .commentary
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Ok(AgentReply {
            game_state: result.game_state,
            question,
            feedback,
            score,
            commentary,
        })
    }
}

/// Decodes a raw response body.
///
/// # Errors
///
/// Returns `AgentError::Malformed` when the body is not a valid envelope, and
/// the envelope's own failure otherwise.
pub(crate) fn decode_reply(body: &str) -> Result<AgentReply, AgentError> {
    let envelope: InvokeEnvelope =
        serde_json::from_str(body).map_err(|err| AgentError::malformed(err.to_string()))?;
    envelope.into_reply()
}

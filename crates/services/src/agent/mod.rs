//! Contract with the external trivia agent.

mod http;
mod scripted;
pub(crate) mod wire;

use async_trait::async_trait;
use trivia_core::model::{Feedback, GameState, Question, Score, SessionId};

use crate::error::AgentError;

pub use http::{AgentConfig, DEFAULT_AGENT_ID, DEFAULT_BASE_URL, HttpAgentClient};
pub use scripted::ScriptedAgent;

/// One instruction addressed to the agent within a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRequest {
    pub instruction: String,
    pub session_id: SessionId,
}

impl AgentRequest {
    #[must_use]
    pub fn new(instruction: impl Into<String>, session_id: SessionId) -> Self {
        Self {
            instruction: instruction.into(),
            session_id,
        }
    }
}

/// A successful agent reply, already decoded into domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentReply {
    pub game_state: GameState,
    pub question: Option<Question>,
    pub feedback: Option<Feedback>,
    pub score: Option<Score>,
    pub commentary: Option<String>,
}

impl AgentReply {
    #[must_use]
    pub fn new(game_state: GameState) -> Self {
        Self {
            game_state,
            question: None,
            feedback: None,
            score: None,
            commentary: None,
        }
    }

    #[must_use]
    pub fn with_question(mut self, question: Question) -> Self {
        self.question = Some(question);
        self
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = Some(feedback);
        self
    }

    #[must_use]
    pub fn with_score(mut self, score: Score) -> Self {
        self.score = Some(score);
        self
    }

    #[must_use]
    pub fn with_commentary(mut self, commentary: impl Into<String>) -> Self {
        self.commentary = Some(commentary.into());
        self
    }
}

/// Sends an instruction to the agent and waits for its verdict.
#[async_trait]
pub trait TriviaAgent: Send + Sync {
    /// # Errors
    ///
    /// Returns `AgentError` for transport failures and for any reply whose
    /// envelope does not report success.
    async fn invoke(&self, request: &AgentRequest) -> Result<AgentReply, AgentError>;
}

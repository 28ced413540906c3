use std::sync::Arc;

use tracing::debug;
use trivia_core::Clock;
use trivia_core::model::{Category, Difficulty};

use crate::agent::{AgentReply, TriviaAgent};
use crate::error::AgentError;
use crate::game::session::{GameSession, PendingRequest};

/// Drives a [`GameSession`] against an agent, one awaited request at a time.
#[derive(Clone)]
pub struct GameSessionController {
    agent: Arc<dyn TriviaAgent>,
    clock: Clock,
    session: GameSession,
}

impl GameSessionController {
    #[must_use]
    pub fn new(agent: Arc<dyn TriviaAgent>, clock: Clock) -> Self {
        Self {
            agent,
            clock,
            session: GameSession::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Lets tests move a fixed clock between games.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    pub fn select_answer(&mut self, index: usize) -> bool {
        self.session.select_answer(index)
    }

    /// Starts a new game. Returns `false` when no request was sent.
    pub async fn start_game(&mut self, category: Category, difficulty: Difficulty) -> bool {
        self.session.set_category(category);
        self.session.set_difficulty(difficulty);
        let pending = self.session.begin_start(&self.clock);
        self.run(pending).await
    }

    /// Submits the selected option. Returns `false` when nothing is selected.
    pub async fn submit_answer(&mut self) -> bool {
        let pending = self.session.begin_submit();
        self.run(pending).await
    }

    pub async fn next_question(&mut self) -> bool {
        let pending = self.session.begin_next();
        self.run(pending).await
    }

    pub fn play_again(&mut self) {
        self.session.play_again();
    }

    async fn run(&mut self, pending: Option<PendingRequest>) -> bool {
        let Some(pending) = pending else {
            return false;
        };
        let outcome = send_pending(self.agent.as_ref(), &pending).await;
        self.session.complete(pending, outcome);
        true
    }
}

/// Sends a request issued by one of the `GameSession::begin_*` methods.
///
/// Hand the outcome back to [`GameSession::complete`] with the same
/// `pending`. Views that keep the session in their own reactive state call
/// this from a spawned task instead of owning a controller.
pub async fn send_pending(
    agent: &dyn TriviaAgent,
    pending: &PendingRequest,
) -> Result<AgentReply, AgentError> {
    debug!(kind = pending.kind().as_str(), "awaiting trivia agent");
    agent.invoke(pending.request()).await
}

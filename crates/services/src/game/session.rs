use tracing::{debug, info, warn};
use trivia_core::Clock;
use trivia_core::instructions;
use trivia_core::model::{
    Category, Difficulty, GameSetup, GameState, Screen, Score, SessionId,
};

use crate::agent::{AgentReply, AgentRequest};
use crate::error::AgentError;

/// Which operation issued an agent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    StartGame,
    SubmitAnswer,
    NextQuestion,
}

impl RequestKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RequestKind::StartGame => "start_game",
            RequestKind::SubmitAnswer => "submit_answer",
            RequestKind::NextQuestion => "next_question",
        }
    }
}

/// The single outstanding request of a session.
///
/// Hand it back to [`GameSession::complete`] together with the agent's
/// outcome. Replies for a ticket that is no longer pending are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    ticket: u64,
    kind: RequestKind,
    request: AgentRequest,
}

impl PendingRequest {
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    #[must_use]
    pub fn request(&self) -> &AgentRequest {
        &self.request
    }
}

/// View-model state for one player in front of the quiz.
///
/// Every network-issuing operation is split into a `begin_*` half, which
/// returns the request to send (or `None` when the operation is not allowed
/// right now), and [`complete`](Self::complete), which applies the outcome.
/// While a request is pending every `begin_*` returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    setup: GameSetup,
    screen: Screen,
    session_id: Option<SessionId>,
    pending: Option<(u64, RequestKind)>,
    next_ticket: u64,
    last_error: Option<String>,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn setup(&self) -> GameSetup {
        self.setup
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.screen.state()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.screen.score()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_kind(&self) -> Option<RequestKind> {
        self.pending.map(|(_, kind)| kind)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Changes the category; only on the setup screen.
    pub fn set_category(&mut self, category: Category) -> bool {
        if !self.can_edit_setup() {
            return false;
        }
        self.setup.category = category;
        true
    }

    /// Changes the difficulty; only on the setup screen.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if !self.can_edit_setup() {
            return false;
        }
        self.setup.difficulty = difficulty;
        true
    }

    fn can_edit_setup(&self) -> bool {
        !self.is_busy() && matches!(self.screen, Screen::Setup)
    }

    /// Marks an option of the current question as the player's answer.
    pub fn select_answer(&mut self, index: usize) -> bool {
        if self.is_busy() {
            return false;
        }
        match &mut self.screen {
            Screen::Question {
                question, selected, ..
            } if index < question.options().len() => {
                *selected = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn begin_start(&mut self, clock: &Clock) -> Option<PendingRequest> {
        if self.is_busy() || !matches!(self.screen, Screen::Setup) {
            debug!(state = self.state().as_str(), "start ignored");
            return None;
        }
        let session_id = SessionId::generate(clock);
        self.session_id = Some(session_id.clone());
        let instruction = instructions::start_game(self.setup);
        Some(self.issue(RequestKind::StartGame, instruction, session_id))
    }

    pub fn begin_submit(&mut self) -> Option<PendingRequest> {
        if self.is_busy() {
            return None;
        }
        let Screen::Question {
            question,
            selected: Some(index),
            ..
        } = &self.screen
        else {
            debug!(state = self.state().as_str(), "submit ignored: no selected answer");
            return None;
        };
        let instruction = instructions::submit_answer(question.option(*index)?);
        let session_id = self.session_id.clone()?;
        Some(self.issue(RequestKind::SubmitAnswer, instruction, session_id))
    }

    pub fn begin_next(&mut self) -> Option<PendingRequest> {
        if self.is_busy() || !matches!(self.screen, Screen::Feedback { .. }) {
            return None;
        }
        let session_id = self.session_id.clone()?;
        Some(self.issue(
            RequestKind::NextQuestion,
            instructions::next_question(),
            session_id,
        ))
    }

    fn issue(
        &mut self,
        kind: RequestKind,
        instruction: String,
        session_id: SessionId,
    ) -> PendingRequest {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.pending = Some((ticket, kind));
        self.last_error = None;
        info!(kind = kind.as_str(), session = %session_id, "dispatching agent request");
        PendingRequest {
            ticket,
            kind,
            request: AgentRequest::new(instruction, session_id),
        }
    }

    /// Applies the outcome of `pending`.
    ///
    /// On success the screen follows the agent's declared state. On failure
    /// the current screen (and selection) is kept and the error message is
    /// recorded. Returns `false` when the reply was stale and ignored.
    pub fn complete(
        &mut self,
        pending: PendingRequest,
        outcome: Result<AgentReply, AgentError>,
    ) -> bool {
        if self.pending.map(|(ticket, _)| ticket) != Some(pending.ticket) {
            debug!(kind = pending.kind.as_str(), "dropping stale agent reply");
            return false;
        }
        self.pending = None;

        match outcome.and_then(|reply| self.next_screen(reply)) {
            Ok(screen) => {
                debug!(
                    kind = pending.kind.as_str(),
                    state = screen.state().as_str(),
                    "agent reply applied"
                );
                self.screen = screen;
                self.last_error = None;
            }
            Err(err) => {
                warn!(kind = pending.kind.as_str(), error = %err, "agent call failed");
                if pending.kind == RequestKind::StartGame {
                    self.session_id = None;
                }
                self.last_error = Some(err.to_string());
            }
        }
        true
    }

    fn next_screen(&self, reply: AgentReply) -> Result<Screen, AgentError> {
        let previous = self.screen.score();
        let score = match reply.score {
            Some(next) => {
                if previous.regresses_to(next) {
                    warn!(
                        previous_correct = previous.correct(),
                        previous_total = previous.total(),
                        correct = next.correct(),
                        total = next.total(),
                        "agent score moved backwards; keeping the higher tally"
                    );
                }
                previous.merge(next)
            }
            None => previous,
        };

        match reply.game_state {
            GameState::Setup => Err(AgentError::malformed("agent declared the setup state")),
            GameState::Question => {
                let question = reply
                    .question
                    .ok_or_else(|| AgentError::malformed("question state without a question"))?;
                Ok(Screen::Question {
                    question,
                    selected: None,
                    score,
                    commentary: reply.commentary,
                })
            }
            GameState::Feedback => {
                let feedback = reply
                    .feedback
                    .ok_or_else(|| AgentError::malformed("feedback state without feedback"))?;
                Ok(Screen::Feedback {
                    question: reply.question.or_else(|| self.screen.question().cloned()),
                    selected: self.screen.selected(),
                    feedback,
                    score,
                    commentary: reply.commentary,
                })
            }
            GameState::GameOver => Ok(Screen::GameOver {
                score,
                commentary: reply.commentary,
            }),
        }
    }

    /// Back to a fresh setup screen. Any reply still in flight is ignored.
    pub fn play_again(&mut self) {
        info!(session = ?self.session_id, "resetting game session");
        *self = Self {
            next_ticket: self.next_ticket,
            ..Self::default()
        };
    }
}

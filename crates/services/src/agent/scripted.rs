use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::agent::{AgentReply, AgentRequest, TriviaAgent};
use crate::error::AgentError;

/// In-memory agent that replays queued outcomes and records what it was sent.
#[derive(Clone, Default)]
pub struct ScriptedAgent {
    outcomes: Arc<Mutex<VecDeque<Result<AgentReply, AgentError>>>>,
    requests: Arc<Mutex<Vec<AgentRequest>>>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, reply: AgentReply) {
        self.push(Ok(reply));
    }

    pub fn push_error(&self, error: AgentError) {
        self.push(Err(error));
    }

    fn push(&self, outcome: Result<AgentReply, AgentError>) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<AgentRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|requests| requests.len()).unwrap_or(0)
    }
}

#[async_trait]
impl TriviaAgent for ScriptedAgent {
    async fn invoke(&self, request: &AgentRequest) -> Result<AgentReply, AgentError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.outcomes
            .lock()
            .ok()
            .and_then(|mut outcomes| outcomes.pop_front())
            .unwrap_or_else(|| Err(AgentError::Rejected("no scripted reply".to_string())))
    }
}

#![forbid(unsafe_code)]

pub mod agent;
pub mod error;
pub mod game;

pub use trivia_core::Clock;

pub use agent::{
    AgentConfig, AgentReply, AgentRequest, HttpAgentClient, ScriptedAgent, TriviaAgent,
};
pub use error::{AgentError, ConfigError};
pub use game::{GameSession, GameSessionController, PendingRequest, RequestKind, send_pending};

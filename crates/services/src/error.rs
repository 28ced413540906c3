//! Shared error types for the services crate.

use thiserror::Error;

/// A failed call to the trivia agent.
///
/// The game controller treats every variant the same way: the attempt is
/// abandoned, the message is shown, and the player may retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AgentError {
    #[error("the trivia agent declined the request: {0}")]
    Rejected(String),
    #[error("the trivia agent answered with status \"{0}\"")]
    Status(String),
    #[error("the trivia agent sent an unusable reply: {0}")]
    Malformed(String),
    #[error("the trivia agent request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl AgentError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}

/// Errors emitted while validating agent configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid agent base url {raw:?}: {reason}")]
    InvalidBaseUrl { raw: String, reason: String },
    #[error("agent id must not be empty")]
    EmptyAgentId,
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::Clock;

const SESSION_PREFIX: &str = "trivia-";

/// Client-generated token scoping one continuous game on the agent side.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Derives a session id from a point in time (unix millis).
    #[must_use]
    pub fn from_time(at: DateTime<Utc>) -> Self {
        Self(format!("{SESSION_PREFIX}{}", at.timestamp_millis()))
    }

    #[must_use]
    pub fn generate(clock: &Clock) -> Self {
        Self::from_time(clock.now())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{fixed_clock, fixed_now};

    #[test]
    fn session_id_is_derived_from_millis() {
        let id = SessionId::from_time(fixed_now());
        assert_eq!(id.as_str(), "trivia-1700000000000");
    }

    #[test]
    fn advancing_the_clock_yields_a_fresh_id() {
        let mut clock = fixed_clock();
        let first = SessionId::generate(&clock);
        clock.advance_millis(5);
        let second = SessionId::generate(&clock);
        assert_ne!(first, second);
        assert_eq!(second.to_string(), "trivia-1700000000005");
    }
}

use serde::{Deserialize, Serialize};

use crate::model::{Feedback, Question, Score};

/// Screen declared by the agent in each reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    Setup,
    Question,
    Feedback,
    GameOver,
}

impl GameState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Setup => "setup",
            GameState::Question => "question",
            GameState::Feedback => "feedback",
            GameState::GameOver => "game_over",
        }
    }
}

/// What the player currently sees, with exactly the data valid for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Setup,
    Question {
        question: Question,
        selected: Option<usize>,
        score: Score,
        commentary: Option<String>,
    },
    Feedback {
        question: Option<Question>,
        selected: Option<usize>,
        feedback: Feedback,
        score: Score,
        commentary: Option<String>,
    },
    GameOver {
        score: Score,
        commentary: Option<String>,
    },
}

impl Screen {
    #[must_use]
    pub fn state(&self) -> GameState {
        match self {
            Screen::Setup => GameState::Setup,
            Screen::Question { .. } => GameState::Question,
            Screen::Feedback { .. } => GameState::Feedback,
            Screen::GameOver { .. } => GameState::GameOver,
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        match self {
            Screen::Setup => Score::default(),
            Screen::Question { score, .. }
            | Screen::Feedback { score, .. }
            | Screen::GameOver { score, .. } => *score,
        }
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        match self {
            Screen::Question { question, .. } => Some(question),
            Screen::Feedback { question, .. } => question.as_ref(),
            Screen::Setup | Screen::GameOver { .. } => None,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        match self {
            Screen::Question { selected, .. } | Screen::Feedback { selected, .. } => *selected,
            Screen::Setup | Screen::GameOver { .. } => None,
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        match self {
            Screen::Feedback { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    #[must_use]
    pub fn commentary(&self) -> Option<&str> {
        match self {
            Screen::Setup => None,
            Screen::Question { commentary, .. }
            | Screen::Feedback { commentary, .. }
            | Screen::GameOver { commentary, .. } => commentary.as_deref(),
        }
    }
}

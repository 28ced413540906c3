use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseSetupError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// Normalizes "General Knowledge", "general-knowledge" and "general_knowledge" alike.
fn slug(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter_map(|ch| match ch {
            ' ' | '-' | '_' => Some('_'),
            ch if ch.is_ascii_alphanumeric() => Some(ch.to_ascii_lowercase()),
            _ => None,
        })
        .collect()
}

/// Question topic offered on the setup screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    GeneralKnowledge,
    Science,
    History,
    Geography,
    Sports,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::GeneralKnowledge,
        Category::Science,
        Category::History,
        Category::Geography,
        Category::Sports,
        Category::Entertainment,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::GeneralKnowledge => "General Knowledge",
            Category::Science => "Science",
            Category::History => "History",
            Category::Geography => "Geography",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::GeneralKnowledge => "general_knowledge",
            Category::Science => "science",
            Category::History => "history",
            Category::Geography => "geography",
            Category::Sports => "sports",
            Category::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = slug(s);
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == wanted)
            .ok_or_else(|| ParseSetupError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = slug(s);
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.slug() == wanted)
            .ok_or_else(|| ParseSetupError::UnknownDifficulty(s.to_string()))
    }
}

/// Choices made on the setup screen before a game starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSetup {
    pub category: Category,
    pub difficulty: Difficulty,
}

impl GameSetup {
    #[must_use]
    pub fn new(category: Category, difficulty: Difficulty) -> Self {
        Self {
            category,
            difficulty,
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,
    #[error("question has no answer options")]
    NoOptions,
    #[error("answer option {index} is empty")]
    EmptyOption { index: usize },
}

/// Display label for the option at `index` ("A", "B", ...).
#[must_use]
pub fn option_label(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|index| *index < 26)
        .map_or_else(|| (index + 1).to_string(), |index| char::from(b'A' + index).to_string())
}

/// A multiple-choice question as received from the agent.
///
/// The correct-answer marker is resolved to an option index once, at
/// construction. See [`resolve_marker`] for the matching rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: Option<usize>,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError` when the text is blank, there are no options,
    /// or one of the options is blank.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_marker: Option<&str>,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }

        let correct_index = correct_marker.and_then(|marker| resolve_marker(marker, &options));

        Ok(Self {
            text,
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Index of the correct option, when the marker identifies exactly one.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> Option<&str> {
        self.correct_index.and_then(|index| self.option(index))
    }
}

/// Maps a correct-answer marker onto an option index.
///
/// In order: an exact (case-insensitive) option match, a single letter read
/// as a position (`"B"`, `"b)"`, `"B."`), then a prefix that matches exactly
/// one option. Anything ambiguous resolves to `None`.
#[must_use]
pub fn resolve_marker(marker: &str, options: &[String]) -> Option<usize> {
    let marker = marker.trim();
    if marker.is_empty() {
        return None;
    }
    let lowered = marker.to_lowercase();

    if let Some(index) = options
        .iter()
        .position(|option| option.trim().to_lowercase() == lowered)
    {
        return Some(index);
    }

    let letter = marker.trim_end_matches([')', '.', ':']).trim();
    let mut chars = letter.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if ch.is_ascii_alphabetic() {
            let index = usize::from(ch.to_ascii_uppercase() as u8 - b'A');
            if index < options.len() {
                return Some(index);
            }
        }
    }

    let mut matches = options
        .iter()
        .enumerate()
        .filter(|(_, option)| option.trim().to_lowercase().starts_with(&lowered))
        .map(|(index, _)| index);
    match (matches.next(), matches.next()) {
        (Some(index), None) => Some(index),
        _ => None,
    }
}

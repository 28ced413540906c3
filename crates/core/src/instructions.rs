//! Natural-language instructions sent to the trivia agent.

use crate::model::GameSetup;

pub const NEXT_QUESTION: &str = "Please give me the next question.";

#[must_use]
pub fn start_game(setup: GameSetup) -> String {
    format!(
        "Start a new trivia game. Category: {}. Difficulty: {}. Please give me the first question.",
        setup.category.label(),
        setup.difficulty.label()
    )
}

/// The selected option is sent verbatim; the agent judges it.
#[must_use]
pub fn submit_answer(option_text: &str) -> String {
    format!("My answer is: {option_text}")
}

#[must_use]
pub fn next_question() -> String {
    NEXT_QUESTION.to_string()
}

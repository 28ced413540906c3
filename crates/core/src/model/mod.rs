mod feedback;
mod ids;
mod question;
mod score;
mod screen;
mod setup;

pub use feedback::Feedback;
pub use ids::SessionId;
pub use question::{Question, QuestionError, option_label, resolve_marker};
pub use score::Score;
pub use screen::{GameState, Screen};
pub use setup::{Category, Difficulty, GameSetup, ParseSetupError};

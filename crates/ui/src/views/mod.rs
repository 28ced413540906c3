mod feedback;
mod game;
mod game_over;
mod question;
mod score;
mod setup;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use feedback::FeedbackPanel;
pub use game::GameView;
pub use game_over::GameOverPanel;
pub use question::QuestionPanel;
pub use score::ScoreBar;
pub use setup::SetupPanel;

#[cfg(test)]
pub(crate) use game::GameTestHandles;

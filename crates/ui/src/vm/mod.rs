mod game_vm;

pub use game_vm::{
    ChoiceVm, FeedbackVm, GameIntent, GameOverVm, GameVm, OptionTone, OptionVm, QuestionVm,
    ScoreVm, ScreenVm, SetupVm, map_game, performance_headline,
};

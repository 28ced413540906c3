use services::{GameSession, RequestKind};
use trivia_core::model::{
    Category, Difficulty, Feedback, GameSetup, Question, Score, Screen, option_label,
};

/// Player actions dispatched from the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameIntent {
    ChooseCategory(Category),
    ChooseDifficulty(Difficulty),
    Start,
    SelectAnswer(usize),
    Submit,
    Next,
    PlayAgain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupVm {
    pub categories: Vec<ChoiceVm>,
    pub difficulties: Vec<ChoiceVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreVm {
    pub fraction_label: String,
    pub percentage_label: String,
}

impl From<Score> for ScoreVm {
    fn from(score: Score) -> Self {
        Self {
            fraction_label: format!("{}/{}", score.correct(), score.total()),
            percentage_label: format!("{}%", score.percentage()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionTone {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub text: String,
    pub selected: bool,
    pub tone: OptionTone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub text: String,
    pub options: Vec<OptionVm>,
    pub can_submit: bool,
    pub score: ScoreVm,
    pub commentary: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub headline: String,
    pub explanation: String,
    pub correct_answer_label: Option<String>,
    pub question_text: Option<String>,
    pub options: Vec<OptionVm>,
    pub score: ScoreVm,
    pub commentary: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverVm {
    pub headline: &'static str,
    pub score: ScoreVm,
    pub commentary: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Setup(SetupVm),
    Question(QuestionVm),
    Feedback(FeedbackVm),
    GameOver(GameOverVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameVm {
    pub screen: ScreenVm,
    pub busy: bool,
    pub busy_label: Option<&'static str>,
    pub error: Option<String>,
}

#[must_use]
pub fn performance_headline(percentage: u32) -> &'static str {
    match percentage {
        90.. => "Outstanding Performance!",
        70..=89 => "Great Job!",
        50..=69 => "Good Effort!",
        _ => "Keep Practicing!",
    }
}

fn busy_label(kind: RequestKind) -> &'static str {
    match kind {
        RequestKind::StartGame => "Preparing your first question...",
        RequestKind::SubmitAnswer => "Checking your answer...",
        RequestKind::NextQuestion => "Fetching the next question...",
    }
}

fn map_setup(setup: GameSetup) -> SetupVm {
    SetupVm {
        categories: Category::ALL
            .into_iter()
            .map(|category| ChoiceVm {
                value: category.slug(),
                label: category.label(),
                selected: category == setup.category,
            })
            .collect(),
        difficulties: Difficulty::ALL
            .into_iter()
            .map(|difficulty| ChoiceVm {
                value: difficulty.slug(),
                label: difficulty.label(),
                selected: difficulty == setup.difficulty,
            })
            .collect(),
    }
}

fn map_options(
    question: &Question,
    selected: Option<usize>,
    verdict: Option<&Feedback>,
) -> Vec<OptionVm> {
    question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let is_selected = selected == Some(index);
            let tone = match (verdict, question.correct_index()) {
                (None, _) => OptionTone::Neutral,
                (Some(_), Some(correct)) if correct == index => OptionTone::Correct,
                (Some(_), Some(_)) if is_selected => OptionTone::Incorrect,
                (Some(feedback), None) if is_selected => {
                    if feedback.is_correct {
                        OptionTone::Correct
                    } else {
                        OptionTone::Incorrect
                    }
                }
                (Some(_), _) => OptionTone::Neutral,
            };
            OptionVm {
                index,
                label: option_label(index),
                text: text.clone(),
                selected: is_selected,
                tone,
            }
        })
        .collect()
}

fn map_feedback(
    question: Option<&Question>,
    selected: Option<usize>,
    feedback: &Feedback,
    score: Score,
    commentary: Option<&str>,
) -> FeedbackVm {
    let headline = if feedback.message.trim().is_empty() {
        let fallback = if feedback.is_correct { "Correct!" } else { "Incorrect" };
        fallback.to_string()
    } else {
        feedback.message.clone()
    };

    FeedbackVm {
        is_correct: feedback.is_correct,
        headline,
        explanation: feedback.explanation.clone(),
        correct_answer_label: question
            .and_then(Question::correct_option)
            .map(|option| format!("Correct answer: {option}")),
        question_text: question.map(|question| question.text().to_string()),
        options: question
            .map(|question| map_options(question, selected, Some(feedback)))
            .unwrap_or_default(),
        score: score.into(),
        commentary: commentary.map(str::to_string),
    }
}

#[must_use]
pub fn map_game(session: &GameSession) -> GameVm {
    let screen = match session.screen() {
        Screen::Setup => ScreenVm::Setup(map_setup(session.setup())),
        Screen::Question {
            question,
            selected,
            score,
            commentary,
        } => ScreenVm::Question(QuestionVm {
            text: question.text().to_string(),
            options: map_options(question, *selected, None),
            can_submit: selected.is_some() && !session.is_busy(),
            score: (*score).into(),
            commentary: commentary.clone(),
        }),
        Screen::Feedback {
            question,
            selected,
            feedback,
            score,
            commentary,
        } => ScreenVm::Feedback(map_feedback(
            question.as_ref(),
            *selected,
            feedback,
            *score,
            commentary.as_deref(),
        )),
        Screen::GameOver { score, commentary } => ScreenVm::GameOver(GameOverVm {
            headline: performance_headline(score.percentage()),
            score: (*score).into(),
            commentary: commentary.clone(),
        }),
    };

    GameVm {
        screen,
        busy: session.is_busy(),
        busy_label: session.pending_kind().map(busy_label),
        error: session.last_error().map(str::to_string),
    }
}

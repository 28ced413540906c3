use services::{AgentError, AgentReply, ScriptedAgent};
use trivia_core::model::{Category, Difficulty, Feedback, GameState, Question, Score};

use crate::theme::Theme;
use crate::views::test_harness::setup_game_harness;
use crate::vm::GameIntent;

fn gold_question() -> Question {
    Question::new(
        "What is the chemical symbol for gold?",
        vec!["Ag".into(), "Au".into(), "Gd".into(), "Go".into()],
        Some("B"),
    )
    .expect("valid question")
}

#[tokio::test(flavor = "current_thread")]
async fn setup_screen_smoke_renders_choices() {
    let mut harness = setup_game_harness(ScriptedAgent::new(), Theme::Classic);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Trivia Challenge"));
    assert!(html.contains("Start Game"));
    assert!(html.contains("General Knowledge"));
    assert!(html.contains("Entertainment"));
    assert!(html.contains("Medium"));
    assert!(html.contains("theme-classic"));
    assert_eq!(harness.agent.request_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn full_round_smoke_reaches_game_over() {
    let agent = ScriptedAgent::new();
    agent.push_reply(
        AgentReply::new(GameState::Question)
            .with_question(gold_question())
            .with_score(Score::new(0, 0))
            .with_commentary("Let's begin with some chemistry."),
    );
    agent.push_reply(
        AgentReply::new(GameState::Feedback)
            .with_feedback(Feedback::new(
                true,
                "Correct!",
                "Au comes from the Latin aurum.",
            ))
            .with_score(Score::new(1, 1)),
    );
    agent.push_reply(AgentReply::new(GameState::GameOver).with_score(Score::new(1, 1)));

    let mut harness = setup_game_harness(agent.clone(), Theme::Classic);
    harness.rebuild();

    harness.dispatch(GameIntent::ChooseCategory(Category::Science));
    harness.dispatch(GameIntent::ChooseDifficulty(Difficulty::Medium));
    harness.dispatch(GameIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("What is the chemical symbol for gold?"));
    assert!(html.contains("Score: 0/0"));
    assert!(html.contains("0%"));
    assert!(html.contains("Let&#39;s begin") || html.contains("Let's begin"));

    harness.dispatch(GameIntent::SelectAnswer(1));
    harness.dispatch(GameIntent::Submit);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("trivia-feedback--correct"));
    assert!(html.contains("Correct answer: Au"));
    assert!(html.contains("Score: 1/1"));
    assert!(html.contains("100%"));
    assert!(html.contains("Next Question"));

    harness.dispatch(GameIntent::Next);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Outstanding Performance!"));
    assert!(html.contains("1/1"));
    assert!(html.contains("100%"));
    assert!(html.contains("Play Again"));

    let requests = agent.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(
        requests[0].instruction,
        "Start a new trivia game. Category: Science. Difficulty: Medium. Please give me the first question."
    );
    assert_eq!(requests[1].instruction, "My answer is: Au");
    assert_eq!(requests[2].instruction, "Please give me the next question.");

    harness.dispatch(GameIntent::PlayAgain);
    let html = harness.render();
    assert!(html.contains("Start Game"));
    assert!(harness.session().session_id().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn submit_without_selection_sends_nothing() {
    let agent = ScriptedAgent::new();
    agent.push_reply(
        AgentReply::new(GameState::Question)
            .with_question(gold_question())
            .with_score(Score::new(0, 0)),
    );

    let mut harness = setup_game_harness(agent.clone(), Theme::Classic);
    harness.rebuild();
    harness.dispatch(GameIntent::Start);
    harness.drive_async().await;

    harness.dispatch(GameIntent::Submit);
    harness.drive_async().await;

    assert_eq!(agent.request_count(), 1);
    assert!(harness.session().screen().question().is_some());
    assert!(harness.render().contains("Submit Answer"));
}

#[tokio::test(flavor = "current_thread")]
async fn failed_start_smoke_shows_alert_on_setup() {
    let agent = ScriptedAgent::new();
    agent.push_error(AgentError::Rejected("agent is offline".into()));

    let mut harness = setup_game_harness(agent, Theme::Classic);
    harness.rebuild();
    harness.dispatch(GameIntent::Start);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("agent is offline"));
    assert!(html.contains("Start Game"));
    assert_eq!(harness.session().state(), GameState::Setup);
}

#[tokio::test(flavor = "current_thread")]
async fn neon_theme_smoke_sets_root_class() {
    let mut harness = setup_game_harness(ScriptedAgent::new(), Theme::Neon);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("app-root theme-neon"));
}

use std::collections::VecDeque;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use services::{
    AgentConfig, AgentError, AgentRequest, GameSessionController, HttpAgentClient, TriviaAgent,
};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use trivia_core::model::{Category, Difficulty, GameState, Score, SessionId};
use trivia_core::time::{fixed_clock, fixed_now};

#[derive(Clone, Default)]
struct Captured {
    bodies: Arc<Mutex<Vec<Value>>>,
    auth: Arc<Mutex<Vec<Option<String>>>>,
}

async fn invoke_ok(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    captured.bodies.lock().await.push(body);
    captured.auth.lock().await.push(
        headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    );
    Json(json!({
        "success": true,
        "response": {
            "status": "success",
            "result": {
                "game_state": "question",
                "question": {
                    "text": "Which planet is closest to the sun?",
                    "options": ["A) Venus", "B) Mercury", "C) Mars", "D) Earth"],
                    "correct_answer": "B"
                },
                "feedback": null,
                "score": { "correct": 0, "total": 0, "percentage": 0 },
                "commentary": "Warm-up time."
            }
        }
    }))
}

async fn invoke_rejected() -> Json<Value> {
    Json(json!({ "success": false, "error": "quota exhausted" }))
}

async fn invoke_unavailable() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

async fn invoke_crashed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": "model backend timed out" })),
    )
}

#[derive(Clone, Default)]
struct Turns {
    replies: Arc<Mutex<VecDeque<Value>>>,
}

async fn invoke_next_turn(State(turns): State<Turns>) -> Json<Value> {
    let result = turns
        .replies
        .lock()
        .await
        .pop_front()
        .unwrap_or_else(|| json!(null));
    Json(json!({
        "success": true,
        "response": { "status": "success", "result": result }
    }))
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn request() -> AgentRequest {
    AgentRequest::new(
        "Start a new trivia game. Category: Science. Difficulty: Medium.",
        SessionId::from_time(fixed_now()),
    )
}

#[tokio::test]
async fn posts_instruction_and_decodes_question() {
    let captured = Captured::default();
    let app = Router::new()
        .route("/invoke", post(invoke_ok))
        .with_state(captured.clone());
    let base_url = serve(app).await;

    let config = AgentConfig::new(&base_url, "trivia-master")
        .unwrap()
        .with_api_key(Some("secret".into()));
    let client = HttpAgentClient::new(config);

    let reply = client.invoke(&request()).await.expect("reply");
    assert_eq!(reply.game_state, GameState::Question);
    assert_eq!(reply.question.unwrap().correct_index(), Some(1));
    assert_eq!(reply.commentary.as_deref(), Some("Warm-up time."));

    let bodies = captured.bodies.lock().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["agent_id"], "trivia-master");
    assert_eq!(bodies[0]["options"]["session_id"], "trivia-1700000000000");
    assert!(bodies[0]["input"].as_str().unwrap().contains("Category: Science"));
    let auth = captured.auth.lock().await;
    assert_eq!(auth[0].as_deref(), Some("Bearer secret"));
}

#[tokio::test]
async fn unsuccessful_envelope_is_rejected() {
    let app = Router::new().route("/invoke", post(invoke_rejected));
    let base_url = serve(app).await;
    let client = HttpAgentClient::new(AgentConfig::new(&base_url, "trivia-master").unwrap());

    let err = client.invoke(&request()).await.unwrap_err();
    assert!(matches!(err, AgentError::Rejected(ref msg) if msg == "quota exhausted"));
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let app = Router::new().route("/invoke", post(invoke_unavailable));
    let base_url = serve(app).await;
    let client = HttpAgentClient::new(AgentConfig::new(&base_url, "trivia-master").unwrap());

    let err = client.invoke(&request()).await.unwrap_err();
    assert!(matches!(err, AgentError::HttpStatus(status) if status.as_u16() == 503));
}

#[tokio::test]
async fn unreachable_agent_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client =
        HttpAgentClient::new(AgentConfig::new(&format!("http://{addr}"), "trivia-master").unwrap());

    let err = client.invoke(&request()).await.unwrap_err();
    assert!(matches!(err, AgentError::Http(_)));
}

#[tokio::test]
async fn error_status_surfaces_the_envelope_error_text() {
    let app = Router::new().route("/invoke", post(invoke_crashed));
    let base_url = serve(app).await;
    let client = HttpAgentClient::new(AgentConfig::new(&base_url, "trivia-master").unwrap());

    let err = client.invoke(&request()).await.unwrap_err();
    assert!(matches!(err, AgentError::Rejected(ref msg) if msg == "model backend timed out"));
}

#[tokio::test]
async fn schema_filled_placeholders_do_not_block_the_game() {
    let turns = Turns::default();
    turns.replies.lock().await.extend([
        json!({
            "game_state": "question",
            "question": {
                "text": "Which planet is closest to the sun?",
                "options": ["A) Venus", "B) Mercury", "C) Mars"],
                "correct_answer": "B"
            },
            "score": { "correct": 0, "total": 0 }
        }),
        json!({
            "game_state": "feedback",
            "question": {},
            "feedback": { "is_correct": true, "message": "Correct!", "explanation": "Mercury orbits closest." },
            "score": { "correct": 1, "total": 1 }
        }),
        json!({
            "game_state": "game_over",
            "question": { "text": "", "options": [], "correct_answer": "" },
            "feedback": { "is_correct": false, "message": "", "explanation": "" },
            "score": { "correct": 1, "total": 1, "percentage": 100 }
        }),
    ]);
    let app = Router::new()
        .route("/invoke", post(invoke_next_turn))
        .with_state(turns);
    let base_url = serve(app).await;
    let client = HttpAgentClient::new(AgentConfig::new(&base_url, "trivia-master").unwrap());
    let mut game = GameSessionController::new(Arc::new(client), fixed_clock());

    assert!(game.start_game(Category::Science, Difficulty::Medium).await);
    assert!(game.select_answer(1));
    assert!(game.submit_answer().await);

    let session = game.session();
    assert_eq!(session.state(), GameState::Feedback);
    assert_eq!(session.last_error(), None);
    assert_eq!(
        session.screen().question().map(|question| question.text()),
        Some("Which planet is closest to the sun?")
    );

    assert!(game.next_question().await);
    let session = game.session();
    assert_eq!(session.state(), GameState::GameOver);
    assert_eq!(session.last_error(), None);
    assert_eq!(session.score(), Score::new(1, 1));
}

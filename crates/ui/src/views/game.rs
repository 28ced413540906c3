use dioxus::prelude::*;
use services::{GameSession, send_pending};
use tracing::debug;

use crate::context::AppContext;
use crate::views::{FeedbackPanel, GameOverPanel, QuestionPanel, SetupPanel};
use crate::vm::{GameIntent, GameVm, ScreenVm, map_game};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The whole quiz: one screen at a time, driven by agent replies.
#[component]
pub fn GameView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(GameSession::new);

    let dispatch = use_callback(move |intent: GameIntent| {
        let mut session = session;
        let pending = {
            let mut guard = session.write();
            match intent {
                GameIntent::ChooseCategory(category) => {
                    guard.set_category(category);
                    None
                }
                GameIntent::ChooseDifficulty(difficulty) => {
                    guard.set_difficulty(difficulty);
                    None
                }
                GameIntent::SelectAnswer(index) => {
                    guard.select_answer(index);
                    None
                }
                GameIntent::Start => guard.begin_start(&ctx.clock()),
                GameIntent::Submit => guard.begin_submit(),
                GameIntent::Next => guard.begin_next(),
                GameIntent::PlayAgain => {
                    guard.play_again();
                    None
                }
            }
        };

        let Some(pending) = pending else {
            debug!(?intent, "intent produced no agent request");
            return;
        };
        let agent = ctx.agent();
        spawn(async move {
            let outcome = send_pending(agent.as_ref(), &pending).await;
            session.write().complete(pending, outcome);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<GameTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let GameVm {
        screen,
        busy,
        busy_label,
        error,
    } = map_game(&session.read());

    rsx! {
        div { class: "page trivia-page",
            header { class: "trivia-header",
                h1 { class: "trivia-title", "Trivia Challenge" }
                p { class: "trivia-tagline", "Pick a topic, answer, and see how you stack up." }
            }
            if let Some(message) = error {
                p { class: "trivia-error", role: "alert", "{message}" }
            }
            if let Some(label) = busy_label {
                p { class: "trivia-busy", aria_live: "polite", "{label}" }
            }
            match screen {
                ScreenVm::Setup(vm) => rsx! {
                    SetupPanel { vm, busy, on_intent: dispatch }
                },
                ScreenVm::Question(vm) => rsx! {
                    QuestionPanel { vm, busy, on_intent: dispatch }
                },
                ScreenVm::Feedback(vm) => rsx! {
                    FeedbackPanel { vm, busy, on_intent: dispatch }
                },
                ScreenVm::GameOver(vm) => rsx! {
                    GameOverPanel { vm, busy, on_intent: dispatch }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct GameTestHandles {
    dispatch: Rc<RefCell<Option<Callback<GameIntent>>>>,
    session: Rc<RefCell<Option<Signal<GameSession>>>>,
}

#[cfg(test)]
impl GameTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<GameIntent>, session: Signal<GameSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<GameIntent> {
        (*self.dispatch.borrow()).expect("game dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<GameSession> {
        (*self.session.borrow()).expect("game session registered")
    }
}

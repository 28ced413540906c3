use dioxus::prelude::*;

use crate::views::ScoreBar;
use crate::views::question::AnswerOption;
use crate::vm::{FeedbackVm, GameIntent};

#[component]
pub fn FeedbackPanel(vm: FeedbackVm, busy: bool, on_intent: EventHandler<GameIntent>) -> Element {
    let tone_class = if vm.is_correct {
        "trivia-feedback trivia-feedback--correct"
    } else {
        "trivia-feedback trivia-feedback--incorrect"
    };

    rsx! {
        section { class: "trivia-card trivia-feedback-screen",
            ScoreBar { score: vm.score.clone() }
            if let Some(text) = vm.question_text.as_deref() {
                h2 { class: "trivia-question__text", "{text}" }
            }
            div { class: "trivia-options",
                for item in vm.options.iter().cloned() {
                    AnswerOption {
                        key: "{item.index}",
                        option: item,
                        disabled: true,
                        on_intent: on_intent,
                    }
                }
            }
            div { class: "{tone_class}", role: "status",
                h3 { class: "trivia-feedback__headline", "{vm.headline}" }
                if let Some(label) = vm.correct_answer_label.as_deref() {
                    p { class: "trivia-feedback__answer", "{label}" }
                }
                if !vm.explanation.is_empty() {
                    p { class: "trivia-feedback__explanation", "{vm.explanation}" }
                }
            }
            if let Some(commentary) = vm.commentary.as_deref() {
                p { class: "trivia-commentary", "{commentary}" }
            }
            button {
                class: "btn btn-primary trivia-next",
                id: "trivia-next",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_intent.call(GameIntent::Next),
                "Next Question"
            }
        }
    }
}

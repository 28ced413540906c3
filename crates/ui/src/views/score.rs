use dioxus::prelude::*;

use crate::vm::ScoreVm;

#[component]
pub fn ScoreBar(score: ScoreVm) -> Element {
    rsx! {
        div { class: "trivia-score",
            span { class: "trivia-score__fraction", "Score: {score.fraction_label}" }
            span { class: "trivia-score__percentage", "{score.percentage_label}" }
        }
    }
}

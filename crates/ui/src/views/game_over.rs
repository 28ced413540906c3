use dioxus::prelude::*;

use crate::vm::{GameIntent, GameOverVm};

#[component]
pub fn GameOverPanel(vm: GameOverVm, busy: bool, on_intent: EventHandler<GameIntent>) -> Element {
    rsx! {
        section { class: "trivia-card trivia-game-over",
            h2 { class: "trivia-game-over__headline", "{vm.headline}" }
            // Label/value pairs for the final tally.
            dl { class: "trivia-summary",
                dt { "Correct" }
                dd { "{vm.score.fraction_label}" }
                dt { "Accuracy" }
                dd { "{vm.score.percentage_label}" }
            }
            if let Some(commentary) = vm.commentary.as_deref() {
                p { class: "trivia-commentary", "{commentary}" }
            }
            button {
                class: "btn btn-primary trivia-play-again",
                id: "trivia-play-again",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_intent.call(GameIntent::PlayAgain),
                "Play Again"
            }
        }
    }
}

use dioxus::prelude::*;
use trivia_core::model::{Category, Difficulty};

use crate::vm::{ChoiceVm, GameIntent, SetupVm};

#[component]
pub fn SetupPanel(vm: SetupVm, busy: bool, on_intent: EventHandler<GameIntent>) -> Element {
    rsx! {
        section { class: "trivia-card trivia-setup",
            h2 { "Choose your challenge" }
            label { class: "trivia-field",
                span { "Category" }
                select {
                    id: "trivia-category",
                    disabled: busy,
                    onchange: move |evt: FormEvent| {
                        if let Ok(category) = evt.value().parse::<Category>() {
                            on_intent.call(GameIntent::ChooseCategory(category));
                        }
                    },
                    for choice in vm.categories.iter().cloned() {
                        ChoiceOption { key: "{choice.value}", choice: choice }
                    }
                }
            }
            label { class: "trivia-field",
                span { "Difficulty" }
                select {
                    id: "trivia-difficulty",
                    disabled: busy,
                    onchange: move |evt: FormEvent| {
                        if let Ok(difficulty) = evt.value().parse::<Difficulty>() {
                            on_intent.call(GameIntent::ChooseDifficulty(difficulty));
                        }
                    },
                    for choice in vm.difficulties.iter().cloned() {
                        ChoiceOption { key: "{choice.value}", choice: choice }
                    }
                }
            }
            button {
                class: "btn btn-primary trivia-start",
                id: "trivia-start",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_intent.call(GameIntent::Start),
                "Start Game"
            }
        }
    }
}

#[component]
fn ChoiceOption(choice: ChoiceVm) -> Element {
    rsx! {
        option { value: "{choice.value}", selected: choice.selected, "{choice.label}" }
    }
}

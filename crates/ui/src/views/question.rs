use dioxus::prelude::*;

use crate::views::ScoreBar;
use crate::vm::{GameIntent, OptionTone, OptionVm, QuestionVm};

#[component]
pub fn QuestionPanel(vm: QuestionVm, busy: bool, on_intent: EventHandler<GameIntent>) -> Element {
    let submit_disabled = busy || !vm.can_submit;

    rsx! {
        section { class: "trivia-card trivia-question",
            ScoreBar { score: vm.score.clone() }
            if let Some(commentary) = vm.commentary.as_deref() {
                p { class: "trivia-commentary", "{commentary}" }
            }
            h2 { class: "trivia-question__text", "{vm.text}" }
            div { class: "trivia-options", role: "listbox",
                for item in vm.options.iter().cloned() {
                    AnswerOption {
                        key: "{item.index}",
                        option: item,
                        disabled: busy,
                        on_intent: on_intent,
                    }
                }
            }
            button {
                class: "btn btn-primary trivia-submit",
                id: "trivia-submit",
                r#type: "button",
                disabled: submit_disabled,
                onclick: move |_| on_intent.call(GameIntent::Submit),
                "Submit Answer"
            }
        }
    }
}

pub(crate) fn option_class(option: &OptionVm) -> String {
    let mut class = String::from("trivia-option");
    if option.selected {
        class.push_str(" trivia-option--selected");
    }
    match option.tone {
        OptionTone::Neutral => {}
        OptionTone::Correct => class.push_str(" trivia-option--correct"),
        OptionTone::Incorrect => class.push_str(" trivia-option--incorrect"),
    }
    class
}

#[component]
pub(crate) fn AnswerOption(
    option: OptionVm,
    disabled: bool,
    on_intent: EventHandler<GameIntent>,
) -> Element {
    let index = option.index;
    let class = option_class(&option);
    let aria_selected = if option.selected { "true" } else { "false" };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "option",
            aria_selected: aria_selected,
            disabled: disabled,
            onclick: move |_| on_intent.call(GameIntent::SelectAnswer(index)),
            span { class: "trivia-option__label", "{option.label}" }
            span { class: "trivia-option__text", "{option.text}" }
        }
    }
}

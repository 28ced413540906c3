use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::GameView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Trivia Challenge" }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                div { class: "fatal",
                    h1 { "Something went wrong" }
                    pre { "{errors:?}" }
                }
            },
            ThemedRoot {}
        }
    }
}

/// Root container; the theme class scopes every style rule.
#[component]
pub fn ThemedRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let class = format!("app-root {}", ctx.theme().css_class());

    rsx! {
        div { class: "{class}",
            GameView {}
        }
    }
}

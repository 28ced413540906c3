use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, GameSession, ScriptedAgent, TriviaAgent};
use trivia_core::time::fixed_clock;

use crate::app::ThemedRoot;
use crate::context::{UiApp, build_app_context};
use crate::theme::Theme;
use crate::views::GameTestHandles;
use crate::vm::GameIntent;

struct TestApp {
    agent: ScriptedAgent,
    clock: Clock,
    theme: Theme,
}

impl UiApp for TestApp {
    fn agent(&self) -> Arc<dyn TriviaAgent> {
        Arc::new(self.agent.clone())
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn theme(&self) -> Theme {
        self.theme
    }
}

#[derive(Props, Clone)]
struct HarnessRootProps {
    app: Arc<TestApp>,
    handles: GameTestHandles,
}

impl PartialEq for HarnessRootProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessRootProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { ThemedRoot {} }
}

pub struct GameHarness {
    pub dom: VirtualDom,
    pub agent: ScriptedAgent,
    handles: GameTestHandles,
}

impl GameHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: GameIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Lets spawned agent calls finish and re-renders.
    pub async fn drive_async(&mut self) {
        for _ in 0..2 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn session(&self) -> GameSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.peek().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_game_harness(agent: ScriptedAgent, theme: Theme) -> GameHarness {
    let handles = GameTestHandles::default();
    let app = Arc::new(TestApp {
        agent: agent.clone(),
        clock: fixed_clock(),
        theme,
    });
    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessRootProps {
            app,
            handles: handles.clone(),
        },
    );
    GameHarness {
        dom,
        agent,
        handles,
    }
}

use std::sync::Arc;

use services::{Clock, TriviaAgent};

use crate::theme::Theme;

pub trait UiApp: Send + Sync {
    fn agent(&self) -> Arc<dyn TriviaAgent>;
    fn clock(&self) -> Clock;
    fn theme(&self) -> Theme;
}

#[derive(Clone)]
pub struct AppContext {
    agent: Arc<dyn TriviaAgent>,
    clock: Clock,
    theme: Theme,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            agent: app.agent(),
            clock: app.clock(),
            theme: app.theme(),
        }
    }

    #[must_use]
    pub fn agent(&self) -> Arc<dyn TriviaAgent> {
        Arc::clone(&self.agent)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }
}

// Provided by the composition root (`crates/app`) or the test harness.

#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

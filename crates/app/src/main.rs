use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::agent::{DEFAULT_AGENT_ID, DEFAULT_BASE_URL};
use services::{AgentConfig, Clock, HttpAgentClient, TriviaAgent};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, Theme, UiApp, build_app_context};

/// Desktop trivia quiz backed by a remote trivia agent.
#[derive(Parser, Debug)]
#[command(name = "trivia", version)]
struct Args {
    /// Base URL of the agent service; requests go to `<url>/invoke`.
    #[arg(long, env = "TRIVIA_AGENT_URL", default_value = DEFAULT_BASE_URL)]
    agent_url: String,
    #[arg(long, env = "TRIVIA_AGENT_ID", default_value = DEFAULT_AGENT_ID)]
    agent_id: String,
    /// Sent as a bearer token when present.
    #[arg(long, env = "TRIVIA_AGENT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// One of classic, neon, minimal.
    #[arg(long, env = "TRIVIA_THEME", default_value_t = Theme::Classic)]
    theme: Theme,
}

struct DesktopApp {
    agent: Arc<dyn TriviaAgent>,
    clock: Clock,
    theme: Theme,
}

impl UiApp for DesktopApp {
    fn agent(&self) -> Arc<dyn TriviaAgent> {
        Arc::clone(&self.agent)
    }

    fn clock(&self) -> Clock {
        self.clock
    }

    fn theme(&self) -> Theme {
        self.theme
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = AgentConfig::new(&args.agent_url, &args.agent_id)
        .context("invalid agent configuration")?
        .with_api_key(args.api_key);
    info!(
        base_url = %config.base_url(),
        agent_id = config.agent_id(),
        authenticated = config.has_api_key(),
        theme = %args.theme,
        "launching trivia desktop"
    );

    let agent = HttpAgentClient::new(config);
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        agent: Arc::new(agent),
        clock: Clock::system(),
        theme: args.theme,
    });
    let context = build_app_context(&app);

    // Some dev setups default the window to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia Challenge")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

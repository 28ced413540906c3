use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use crate::agent::wire::{InvokeOptions, InvokeRequest, decode_reply};
use crate::agent::{AgentReply, AgentRequest, TriviaAgent};
use crate::error::{AgentError, ConfigError};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_AGENT_ID: &str = "trivia-master";

#[derive(Clone, Debug)]
pub struct AgentConfig {
    base_url: Url,
    agent_id: String,
    api_key: Option<String>,
}

impl AgentConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` when the base url does not parse or the agent id is blank.
    pub fn new(base_url: &str, agent_id: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url.trim()).map_err(|err| ConfigError::InvalidBaseUrl {
            raw: base_url.to_string(),
            reason: err.to_string(),
        })?;
        let agent_id = agent_id.trim();
        if agent_id.is_empty() {
            return Err(ConfigError::EmptyAgentId);
        }
        Ok(Self {
            base_url,
            agent_id: agent_id.to_string(),
            api_key: None,
        })
    }

    /// Sets a bearer token; blank keys are ignored.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn invoke_url(&self) -> String {
        format!("{}/invoke", self.base_url.as_str().trim_end_matches('/'))
    }
}

/// Talks to the agent's invoke endpoint over HTTP.
#[derive(Clone)]
pub struct HttpAgentClient {
    client: Client,
    config: AgentConfig,
}

impl HttpAgentClient {
    #[must_use]
    pub fn new(config: AgentConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TriviaAgent for HttpAgentClient {
    async fn invoke(&self, request: &AgentRequest) -> Result<AgentReply, AgentError> {
        let url = self.config.invoke_url();
        let payload = InvokeRequest {
            input: &request.instruction,
            agent_id: &self.config.agent_id,
            options: InvokeOptions {
                session_id: request.session_id.as_str(),
            },
        };
        info!(%url, session = %request.session_id, "invoking trivia agent");

        let mut builder = self.client.post(url).json(&payload);
        if let Some(api_key) = self.config.api_key.as_deref() {
            builder = builder.bearer_auth(api_key);
        }
        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            // Error pages may still carry the agent's own failure envelope.
            let body = response.text().await.unwrap_or_default();
            warn!(%status, bytes = body.len(), "trivia agent returned an error status");
            return Err(match decode_reply(&body) {
                Err(err @ (AgentError::Rejected(_) | AgentError::Status(_))) => err,
                _ => AgentError::HttpStatus(status),
            });
        }

        let body = response.text().await?;
        debug!(session = %request.session_id, bytes = body.len(), "trivia agent replied");
        decode_reply(&body)
    }
}

//! Agent configuration.

use crate::termination::PhraseScope;
use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint (a local Ollama server).
pub const DEFAULT_BACKEND_ENDPOINT: &str = "http://localhost:11434/v1";

/// Default model identifier, in `provider/model` form.
pub const DEFAULT_MODEL_ID: &str = "ollama/llama3.2";

/// Default credential. Ollama accepts any non-empty key.
pub const DEFAULT_CREDENTIAL: &str = "ollama";

/// Default ceiling on messages per conversation.
pub const DEFAULT_MAX_TURNS: usize = 20;

/// What to do when a message cannot be inspected for termination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionPolicy {
    /// Fail the conversation.
    #[default]
    Fail,
    /// Log a warning and treat the message as not terminal.
    Continue,
}

/// Configuration for a travel agent conversation.
///
/// Passed explicitly at construction. Only the credential can be taken from
/// the environment, through [`with_credential_from_env`](Self::with_credential_from_env).
///
/// # Example
///
/// ```
/// use voyage_agent::AgentConfig;
///
/// let config = AgentConfig::default()
///     .with_model_id("ollama/qwen2.5")
///     .with_max_turns(10);
/// assert_eq!(config.max_turns, 10);
/// assert_eq!(config.backend_endpoint, "http://localhost:11434/v1");
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Base URL of the OpenAI-compatible API, including any version segment.
    pub backend_endpoint: String,
    /// Model identifier in `provider/model` form.
    pub model_id: String,
    /// API key sent as a bearer token.
    pub credential: String,
    /// Sampling temperature for planner requests.
    pub decoding_temperature: f32,
    /// Maximum number of messages in one conversation.
    pub max_turns: usize,
    /// Handling of messages that cannot be inspected for termination.
    pub inspection_policy: InspectionPolicy,
    /// Which messages the completion phrases apply to.
    pub phrase_scope: PhraseScope,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            backend_endpoint: DEFAULT_BACKEND_ENDPOINT.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            credential: DEFAULT_CREDENTIAL.to_string(),
            decoding_temperature: 0.0,
            max_turns: DEFAULT_MAX_TURNS,
            inspection_policy: InspectionPolicy::default(),
            phrase_scope: PhraseScope::default(),
        }
    }
}

impl core::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("backend_endpoint", &self.backend_endpoint)
            .field("model_id", &self.model_id)
            .field("credential", &"[REDACTED]")
            .field("decoding_temperature", &self.decoding_temperature)
            .field("max_turns", &self.max_turns)
            .field("inspection_policy", &self.inspection_policy)
            .field("phrase_scope", &self.phrase_scope)
            .finish()
    }
}

impl AgentConfig {
    /// Sets the backend endpoint.
    #[must_use]
    pub fn with_backend_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.backend_endpoint = endpoint.into();
        self
    }

    /// Sets the model identifier.
    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Sets the credential.
    #[must_use]
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = credential.into();
        self
    }

    /// Replaces the credential with the value of `var`, if it is set and
    /// not blank.
    #[must_use]
    pub fn with_credential_from_env(mut self, var: &str) -> Self {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => {
                tracing::debug!(var, "credential taken from environment");
                self.credential = value;
            }
            _ => {}
        }
        self
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub fn with_decoding_temperature(mut self, temperature: f32) -> Self {
        self.decoding_temperature = temperature;
        self
    }

    /// Sets the turn ceiling.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Sets the inspection policy.
    #[must_use]
    pub fn with_inspection_policy(mut self, policy: InspectionPolicy) -> Self {
        self.inspection_policy = policy;
        self
    }

    /// Sets the completion phrase scope.
    #[must_use]
    pub fn with_phrase_scope(mut self, scope: PhraseScope) -> Self {
        self.phrase_scope = scope;
        self
    }

    /// Returns the provider part of the model identifier.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.model_id
            .split_once('/')
            .map_or(self.model_id.as_str(), |(provider, _)| provider)
    }
}

//! ReAct travel planning agent built with Voyage.
//!
//! A planner model proposes one tool call per turn; the executor runs it and
//! replies with an observation. The loop ends when the planner says
//! `ACTION: TERMINATE` or the turn limit is reached.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  TravelAgentSystem                                   │
//! │                                                      │
//! │  ┌─────────┐  ACTION   ┌──────────┐   ┌──────────┐   │
//! │  │ Planner │──────────▶│ Executor │──▶│  Tools   │   │
//! │  └─────────┘           └────┬─────┘   └──────────┘   │
//! │       ▲      OBSERVATION    │                        │
//! │       └─────────────────────┘                        │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod render;
pub mod telemetry;
pub mod tools;

use std::sync::Arc;
use voyage_agent::{
    AgentConfig, CancellationToken, ConversationOutcome, Executor, LlmPlanner, Orchestrator,
};
use voyage_model_providers::OpenAiCompatProvider;
use voyage_models::ModelRegistry;
use voyage_models::error::CreateModelError;
use voyage_models::llm::Llm;
use voyage_tools::{ToolError, ToolRegistry};

/// Errors raised while assembling the agent.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The model identifier could not be resolved.
    #[error("model setup failed: {0}")]
    Model(#[from] CreateModelError),
    /// The tool set could not be registered.
    #[error("tool setup failed: {0}")]
    Tools(#[from] ToolError),
}

/// Planner, executor, and travel tools wired together.
pub struct TravelAgentSystem {
    registry: Arc<ToolRegistry>,
    orchestrator: Orchestrator,
}

impl core::fmt::Debug for TravelAgentSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TravelAgentSystem")
            .field("tools", &self.registry.names())
            .field("max_turns", &self.orchestrator.max_turns())
            .finish()
    }
}

impl TravelAgentSystem {
    /// Builds the system against the OpenAI-compatible backend named in `config`.
    ///
    /// No request is sent until a query runs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Model`] for a malformed model identifier.
    pub fn new(config: &AgentConfig) -> Result<Self, AppError> {
        let mut models = ModelRegistry::new();
        models.register_llm_provider(
            config.provider_name(),
            Arc::new(OpenAiCompatProvider::new(
                config.backend_endpoint.clone(),
                config.credential.clone(),
            )),
        )?;
        let llm = models.llm(&config.model_id)?;
        tracing::info!(
            endpoint = %config.backend_endpoint,
            model = %config.model_id,
            "travel agent configured"
        );
        Self::with_llm(llm, config)
    }

    /// Builds the system around an existing model handle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Tools`] if the travel tools fail to register.
    pub fn with_llm(llm: Llm, config: &AgentConfig) -> Result<Self, AppError> {
        let registry = Arc::new(tools::travel_registry()?);
        let planner = LlmPlanner::for_registry(llm, &registry)
            .with_temperature(config.decoding_temperature);
        let orchestrator =
            Orchestrator::new(planner, Executor::new(Arc::clone(&registry))).with_config(config);
        Ok(Self {
            registry,
            orchestrator,
        })
    }

    /// Returns the registered tools.
    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Runs one conversation for `query`.
    pub async fn run_query(&self, query: &str) -> ConversationOutcome {
        self.run_query_with_cancellation(query, CancellationToken::new())
            .await
    }

    /// Runs one conversation, stopping between turns once `token` is cancelled.
    pub async fn run_query_with_cancellation(
        &self,
        query: &str,
        token: CancellationToken,
    ) -> ConversationOutcome {
        let outcome = self
            .orchestrator
            .start_with_cancellation(query, token)
            .await;
        tracing::info!(
            status = ?outcome.status,
            messages = outcome.transcript.len(),
            "conversation finished"
        );
        outcome
    }
}

//! The planning role.

use crate::action::{ParsedAction, parse_action};
use crate::error::ConversationError;
use crate::message::{Message, Role, Transcript};
use async_trait::async_trait;
use voyage_models::llm::{self, GenerationRequest, Llm};
use voyage_tools::ToolRegistry;

/// Persona placed at the top of the planner's system prompt.
pub const DEFAULT_PERSONA: &str = "You plan travel using a systematic approach.";

const REACT_PROTOCOL: &str = "\
You work in the ReAct pattern. Each of your replies is one cycle:
THOUGHT: reason about the current situation and what is still missing
ACTION: pick exactly one tool from the list below and give its parameters
OBSERVATION: after the tool result arrives, analyse it before the next cycle

Format every reply exactly as:
THOUGHT: [reasoning about what to do next]
ACTION: [tool_name] {\"parameter\": \"value\"}

Keep cycling until the request is fully answered. Then reply with a summary
of everything you found, ending with:
Thought: here's the summary... Task is complete.
Action: TERMINATE";

/// Produces the next planner message of a conversation.
#[async_trait]
pub trait Planner: Send + Sync {
    /// Proposes the next message given the query and the transcript so far.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError::ReasoningUnavailable`] when no message
    /// can be produced.
    async fn propose(
        &self,
        query: &str,
        transcript: &Transcript,
    ) -> Result<Message, ConversationError>;
}

/// Builds the planner system prompt: persona, protocol, and the available
/// tools with their parameter names.
///
/// Optional parameters are marked with a trailing `?`.
#[must_use]
pub fn system_prompt(persona: &str, registry: &ToolRegistry) -> String {
    let tools = registry
        .definitions()
        .iter()
        .map(|definition| {
            let params = definition
                .parameter_names()
                .into_iter()
                .map(|(name, required)| {
                    if required {
                        name.to_string()
                    } else {
                        format!("{name}?")
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("- {}({params}): {}", definition.name, definition.description)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{persona}\n\n{REACT_PROTOCOL}\n\nAvailable tools:\n{tools}")
}

/// A [`Planner`] backed by a reasoning model.
#[derive(Debug, Clone)]
pub struct LlmPlanner {
    llm: Llm,
    system_prompt: String,
    temperature: f32,
}

impl LlmPlanner {
    /// Creates a planner with an explicit system prompt.
    #[must_use]
    pub fn new(llm: Llm, system_prompt: impl Into<String>) -> Self {
        Self {
            llm,
            system_prompt: system_prompt.into(),
            temperature: 0.0,
        }
    }

    /// Creates a planner whose prompt advertises the tools of `registry`.
    #[must_use]
    pub fn for_registry(llm: Llm, registry: &ToolRegistry) -> Self {
        Self::new(llm, system_prompt(DEFAULT_PERSONA, registry))
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Returns the system prompt.
    #[must_use]
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Builds the generation request for the next turn.
    ///
    /// The query is the first user message. Planner messages follow as
    /// assistant messages and executor observations as user messages.
    #[must_use]
    pub fn request(&self, query: &str, transcript: &Transcript) -> GenerationRequest {
        let messages = core::iter::once(llm::Message::user(query))
            .chain(transcript.iter().map(|message| match message.role {
                Role::Planner => llm::Message::assistant(message.content.clone()),
                Role::Executor => llm::Message::user(message.content.clone()),
            }))
            .collect();

        GenerationRequest::from_messages(self.system_prompt.clone(), messages)
            .temperature(self.temperature)
    }
}

#[async_trait]
impl Planner for LlmPlanner {
    async fn propose(
        &self,
        query: &str,
        transcript: &Transcript,
    ) -> Result<Message, ConversationError> {
        let request = self.request(query, transcript);
        let response = self.llm.generate(request).await?;
        tracing::debug!(
            model = self.llm.model_name(),
            output_tokens = ?response.usage.output_tokens,
            "planner response received"
        );

        let content = response.text();
        let message = Message::planner(content.trim());
        Ok(match parse_action(&message.content) {
            Ok(ParsedAction::Call(call)) => message.with_action(call),
            _ => message,
        })
    }
}

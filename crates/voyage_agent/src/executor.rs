//! The executing role.
//!
//! The executor reads the tool call from a planner message, runs it against
//! the shared [`ToolRegistry`], and answers with an `OBSERVATION:` message.
//! Every failure is reported to the planner as an observation so the
//! conversation can recover.

use crate::action::{ACTION_LABEL, OBSERVATION_LABEL, ParsedAction, parse_action};
use crate::message::Message;
use crate::termination::{InspectionError, TerminationPredicate};
use std::sync::Arc;
use voyage_tools::{FunctionCall, ToolError, ToolRegistry};

/// Result of one executor turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorTurn {
    /// The observation message to append.
    pub message: Message,
    /// Termination verdict for `message`.
    pub verdict: Result<bool, InspectionError>,
}

/// Runs planner-requested tools.
#[derive(Debug, Clone)]
pub struct Executor {
    registry: Arc<ToolRegistry>,
    predicate: TerminationPredicate,
}

impl Executor {
    /// Creates an executor over a shared registry.
    #[must_use]
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            predicate: TerminationPredicate::default(),
        }
    }

    /// Sets the predicate applied to observations.
    #[must_use]
    pub fn with_predicate(mut self, predicate: TerminationPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Returns the tool registry.
    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Executes the action of `planner_message` and returns the observation.
    ///
    /// The message's structured action is used when present; otherwise its
    /// content is parsed.
    pub async fn execute(&self, planner_message: &Message) -> ExecutorTurn {
        let content = match &planner_message.structured_action {
            Some(call) => self.run(call).await,
            None => match parse_action(&planner_message.content) {
                Ok(ParsedAction::Call(call)) => self.run(&call).await,
                Ok(ParsedAction::Terminate) => {
                    observation("no tool to run, the planner asked to stop")
                }
                Err(err) => {
                    tracing::warn!(error = %err, "could not parse planner action");
                    observation(format!(
                        "could not read the action ({err}). \
                         Reply with {ACTION_LABEL}: <tool_name> {{\"parameter\": \"value\"}}"
                    ))
                }
            },
        };

        let message = Message::executor(content);
        let verdict = self.predicate.evaluate(&message);
        ExecutorTurn { message, verdict }
    }

    async fn run(&self, call: &FunctionCall) -> String {
        match self.registry.execute(&call.name, call.arguments()).await {
            Ok(output) => {
                tracing::info!(tool = %call.name, "tool executed");
                observation(format!("{} returned {output}", call.name))
            }
            Err(ToolError::UnknownTool(name)) => {
                tracing::warn!(tool = %name, "planner requested an unregistered tool");
                observation(format!(
                    "tool '{name}' is not available. Available tools: {}",
                    self.registry.names().join(", ")
                ))
            }
            Err(err) => {
                tracing::warn!(tool = %call.name, error = %err, "tool failed");
                observation(format!("{} failed: {err}", call.name))
            }
        }
    }
}

fn observation(text: impl core::fmt::Display) -> String {
    format!("{OBSERVATION_LABEL}: {text}")
}

//! Conversation state machine.
//!
//! The [`Orchestrator`] alternates planner and executor turns over one
//! [`Transcript`]:
//!
//! | From | Event | To |
//! |------|-------|----|
//! | `AwaitingPlanner` | non-terminal proposal | `AwaitingExecutor` |
//! | `AwaitingPlanner` | terminal proposal or `ACTION: TERMINATE` | `Terminated` |
//! | `AwaitingExecutor` | non-terminal observation | `AwaitingPlanner` |
//! | `AwaitingExecutor` | terminal observation | `Terminated` |
//! | any | backend error, turn limit, cancellation, inspection error | `Failed` |
//!
//! Each appended message counts as one turn. Cancellation is checked
//! between turns only; a turn in progress runs to completion.

use crate::action::{ACTION_LABEL, ParsedAction, THOUGHT_LABEL, parse_action, strip_label};
use crate::config::{AgentConfig, DEFAULT_MAX_TURNS, InspectionPolicy};
use crate::error::ConversationError;
use crate::executor::Executor;
use crate::message::{Message, Role, Transcript};
use crate::planner::Planner;
use crate::termination::{InspectionError, TerminationPredicate};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Where a conversation is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    /// The planner owns the next turn.
    #[default]
    AwaitingPlanner,
    /// The executor owns the next turn.
    AwaitingExecutor,
    /// A terminal message was produced.
    Terminated,
    /// The conversation stopped on an error.
    Failed,
}

impl ConversationStatus {
    /// Returns `true` for `Terminated` and `Failed`.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Terminated | Self::Failed)
    }
}

/// Mutable state of one conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    /// The user's request.
    pub query: String,
    /// Messages appended so far.
    pub transcript: Transcript,
    /// Current lifecycle state.
    pub status: ConversationStatus,
    /// Number of turns taken.
    pub turns_taken: usize,
}

impl ConversationState {
    /// Creates the initial state for `query`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            transcript: Transcript::new(),
            status: ConversationStatus::AwaitingPlanner,
            turns_taken: 0,
        }
    }

    /// Returns `true` once the conversation has terminated normally.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.status == ConversationStatus::Terminated
    }

    fn record(&mut self, message: Message) {
        self.transcript.push(message);
        self.turns_taken += 1;
    }
}

/// Final result of a conversation.
#[derive(Debug)]
pub struct ConversationOutcome {
    /// The user's request.
    pub query: String,
    /// Every message of the conversation, also when it failed.
    pub transcript: Transcript,
    /// Final answer, or a failure notice.
    pub summary: String,
    /// `Terminated` or `Failed`.
    pub status: ConversationStatus,
    /// Why the conversation failed.
    pub error: Option<ConversationError>,
}

impl ConversationOutcome {
    /// Returns `true` if the conversation terminated normally.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.status == ConversationStatus::Terminated
    }
}

/// Drives planner and executor turns until termination or failure.
pub struct Orchestrator {
    planner: Box<dyn Planner>,
    executor: Executor,
    predicate: TerminationPredicate,
    max_turns: usize,
    inspection_policy: InspectionPolicy,
}

impl core::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("executor", &self.executor)
            .field("predicate", &self.predicate)
            .field("max_turns", &self.max_turns)
            .field("inspection_policy", &self.inspection_policy)
            .finish_non_exhaustive()
    }
}

impl Orchestrator {
    /// Creates an orchestrator with the default turn ceiling, predicate,
    /// and inspection policy.
    pub fn new(planner: impl Planner + 'static, executor: Executor) -> Self {
        let predicate = TerminationPredicate::default();
        Self {
            planner: Box::new(planner),
            executor: executor.with_predicate(predicate),
            predicate,
            max_turns: DEFAULT_MAX_TURNS,
            inspection_policy: InspectionPolicy::default(),
        }
    }

    /// Applies the turn ceiling, inspection policy, and phrase scope of
    /// `config`.
    #[must_use]
    pub fn with_config(self, config: &AgentConfig) -> Self {
        self.with_max_turns(config.max_turns)
            .with_inspection_policy(config.inspection_policy)
            .with_predicate(TerminationPredicate::new().with_phrase_scope(config.phrase_scope))
    }

    /// Sets the maximum number of messages per conversation.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Sets the handling of uninspectable messages.
    #[must_use]
    pub fn with_inspection_policy(mut self, policy: InspectionPolicy) -> Self {
        self.inspection_policy = policy;
        self
    }

    /// Sets the termination predicate for both roles.
    #[must_use]
    pub fn with_predicate(mut self, predicate: TerminationPredicate) -> Self {
        self.predicate = predicate;
        self.executor = self.executor.with_predicate(predicate);
        self
    }

    /// Returns the turn ceiling.
    #[must_use]
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Runs a conversation for `query` to completion.
    pub async fn start(&self, query: impl Into<String>) -> ConversationOutcome {
        self.start_with_cancellation(query, CancellationToken::new())
            .await
    }

    /// Runs a conversation that stops with [`ConversationError::Cancelled`]
    /// once `cancel` is triggered.
    pub async fn start_with_cancellation(
        &self,
        query: impl Into<String>,
        cancel: CancellationToken,
    ) -> ConversationOutcome {
        let mut state = ConversationState::new(query);
        tracing::info!(max_turns = self.max_turns, "conversation started");

        let error = match self.drive(&mut state, &cancel).await {
            Ok(()) => {
                state.status = ConversationStatus::Terminated;
                tracing::info!(turns = state.turns_taken, "conversation terminated");
                None
            }
            Err(err) => {
                state.status = ConversationStatus::Failed;
                tracing::error!(turns = state.turns_taken, error = %err, "conversation failed");
                Some(err)
            }
        };

        let summary = match &error {
            None => summarize(&state.transcript),
            Some(err) => format!("conversation failed: {err}"),
        };

        ConversationOutcome {
            query: state.query,
            transcript: state.transcript,
            summary,
            status: state.status,
            error,
        }
    }

    async fn drive(
        &self,
        state: &mut ConversationState,
        cancel: &CancellationToken,
    ) -> Result<(), ConversationError> {
        loop {
            if cancel.is_cancelled() {
                return Err(ConversationError::Cancelled);
            }
            if state.turns_taken >= self.max_turns {
                return Err(ConversationError::TurnLimitExceeded {
                    max_turns: self.max_turns,
                });
            }

            let turn = state.turns_taken + 1;
            let (message, verdict, next) = match state.status {
                ConversationStatus::AwaitingPlanner => {
                    let message = self
                        .planner
                        .propose(&state.query, &state.transcript)
                        .await?;
                    let verdict = match self.predicate.evaluate(&message) {
                        Ok(false) => Ok(asks_to_stop(&message)),
                        verdict => verdict,
                    };
                    (message, verdict, ConversationStatus::AwaitingExecutor)
                }
                ConversationStatus::AwaitingExecutor => {
                    let executed = match state.transcript.last_from(Role::Planner) {
                        Some(planner_message) => self.executor.execute(planner_message).await,
                        None => self.executor.execute(&Message::planner("")).await,
                    };
                    (
                        executed.message,
                        executed.verdict,
                        ConversationStatus::AwaitingPlanner,
                    )
                }
                ConversationStatus::Terminated | ConversationStatus::Failed => return Ok(()),
            };

            tracing::debug!(turn, role = %message.role, content = %message.content, "turn completed");
            state.record(message);

            if self.inspect(verdict)? {
                return Ok(());
            }
            state.status = next;
        }
    }

    fn inspect(&self, verdict: Result<bool, InspectionError>) -> Result<bool, ConversationError> {
        match verdict {
            Ok(terminal) => Ok(terminal),
            Err(err) => match self.inspection_policy {
                InspectionPolicy::Fail => Err(ConversationError::Inspection(err)),
                InspectionPolicy::Continue => {
                    tracing::warn!(error = %err, "termination check failed, continuing");
                    Ok(false)
                }
            },
        }
    }
}

/// Returns `true` if the planner's action line is a stop request in any case,
/// e.g. `Action: Terminate`.
fn asks_to_stop(message: &Message) -> bool {
    message.structured_action.is_none()
        && matches!(parse_action(&message.content), Ok(ParsedAction::Terminate))
}

/// Extracts the final answer from a finished transcript.
///
/// Uses the last planner message with its `ACTION:` lines removed and the
/// `THOUGHT:` label stripped. Falls back to the raw message when nothing is
/// left.
#[must_use]
pub fn summarize(transcript: &Transcript) -> String {
    let Some(last) = transcript
        .last_from(Role::Planner)
        .or_else(|| transcript.last())
    else {
        return String::new();
    };

    let summary = last
        .content
        .lines()
        .filter(|line| strip_label(line, ACTION_LABEL).is_none())
        .map(|line| strip_label(line, THOUGHT_LABEL).unwrap_or(line).trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if summary.is_empty() {
        last.content.trim().to_string()
    } else {
        summary
    }
}

//! Conversation errors.

use crate::termination::InspectionError;
use thiserror::Error;
use voyage_models::llm::GenerationError;

/// Conditions that move a conversation to the failed state.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// The reasoning backend could not produce a planner message.
    #[error("reasoning backend unavailable: {0}")]
    ReasoningUnavailable(#[from] GenerationError),

    /// The turn ceiling was reached before a terminal message.
    #[error("turn limit of {max_turns} reached without termination")]
    TurnLimitExceeded {
        /// The configured ceiling.
        max_turns: usize,
    },

    /// The caller cancelled the conversation.
    #[error("conversation cancelled")]
    Cancelled,

    /// A message could not be checked for termination.
    #[error("termination check failed: {0}")]
    Inspection(#[from] InspectionError),
}

//! Termination detection.
//!
//! A conversation ends when a message contains the [`TERMINATION_MARKER`]
//! or, for messages in the configured [`PhraseScope`], one of the
//! [`COMPLETION_PHRASES`].

use crate::message::{Message, Role};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Literal marker that ends a conversation. Matched case-sensitively.
pub const TERMINATION_MARKER: &str = "TERMINATE";

/// Phrases that signal completion. Matched case-insensitively.
pub const COMPLETION_PHRASES: [&str; 3] = ["completed", "here are the results", "finished"];

/// A message could not be inspected for termination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectionError {
    /// The message has no text, or only whitespace.
    #[error("message content is empty")]
    EmptyContent,
    /// The message is not an object with text content.
    #[error("message content is not text")]
    NotText,
}

/// Which messages the completion phrases apply to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseScope {
    /// Only planner messages. Executor observations end a conversation
    /// through the marker alone.
    #[default]
    PlannerOnly,
    /// Every message, including tool observations.
    AllMessages,
}

/// Decides whether a message ends the conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminationPredicate {
    phrase_scope: PhraseScope,
}

impl TerminationPredicate {
    /// Creates a predicate with the default phrase scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which messages the completion phrases apply to.
    #[must_use]
    pub fn with_phrase_scope(mut self, phrase_scope: PhraseScope) -> Self {
        self.phrase_scope = phrase_scope;
        self
    }

    /// Returns the configured phrase scope.
    #[must_use]
    pub fn phrase_scope(&self) -> PhraseScope {
        self.phrase_scope
    }

    /// Evaluates a message.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionError::EmptyContent`] if the message has no text.
    pub fn evaluate(&self, message: &Message) -> Result<bool, InspectionError> {
        self.evaluate_text(&message.content, Some(message.role))
    }

    /// Evaluates a message, treating inspection errors as "not terminal".
    #[must_use]
    pub fn is_terminal(&self, message: &Message) -> bool {
        self.evaluate(message).unwrap_or_else(|err| {
            tracing::warn!(role = %message.role, error = %err, "termination check failed");
            false
        })
    }

    /// Evaluates a raw JSON message of the form `{"role": ..., "content": ...}`.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionError::NotText`] for non-objects and non-string
    /// content, and [`InspectionError::EmptyContent`] for missing or blank
    /// content.
    pub fn evaluate_value(&self, value: &Value) -> Result<bool, InspectionError> {
        let object = value.as_object().ok_or(InspectionError::NotText)?;
        let content = match object.get("content") {
            None | Some(Value::Null) => return Err(InspectionError::EmptyContent),
            Some(Value::String(content)) => content,
            Some(_) => return Err(InspectionError::NotText),
        };
        let role = object
            .get("role")
            .and_then(|role| serde_json::from_value::<Role>(role.clone()).ok());
        self.evaluate_text(content, role)
    }

    /// Evaluates a raw JSON message, returning `false` for anything that
    /// cannot be inspected.
    #[must_use]
    pub fn is_terminal_value(&self, value: &Value) -> bool {
        self.evaluate_value(value).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "raw message not inspectable");
            false
        })
    }

    fn evaluate_text(&self, content: &str, role: Option<Role>) -> Result<bool, InspectionError> {
        if content.trim().is_empty() {
            return Err(InspectionError::EmptyContent);
        }
        if content.contains(TERMINATION_MARKER) {
            return Ok(true);
        }

        let phrases_apply = match self.phrase_scope {
            PhraseScope::AllMessages => true,
            PhraseScope::PlannerOnly => role != Some(Role::Executor),
        };
        if !phrases_apply {
            return Ok(false);
        }

        let lowered = content.to_lowercase();
        Ok(COMPLETION_PHRASES
            .iter()
            .any(|phrase| lowered.contains(phrase)))
    }
}

//! Conversation messages and the transcript.

use serde::{Deserialize, Serialize};
use voyage_tools::FunctionCall;

/// The participant that produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The reasoning agent proposing thoughts and actions.
    Planner,
    /// The proxy agent executing tools and reporting observations.
    Executor,
}

impl Role {
    /// Returns the display label of the role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planner => "planner",
            Self::Executor => "executor",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who produced the message.
    pub role: Role,
    /// Free text, in the THOUGHT / ACTION / OBSERVATION format.
    pub content: String,
    /// The tool call parsed from `content`, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_action: Option<FunctionCall>,
}

impl Message {
    /// Creates a planner message.
    #[must_use]
    pub fn planner(content: impl Into<String>) -> Self {
        Self {
            role: Role::Planner,
            content: content.into(),
            structured_action: None,
        }
    }

    /// Creates an executor message.
    #[must_use]
    pub fn executor(content: impl Into<String>) -> Self {
        Self {
            role: Role::Executor,
            content: content.into(),
            structured_action: None,
        }
    }

    /// Attaches a parsed tool call.
    #[must_use]
    pub fn with_action(mut self, call: FunctionCall) -> Self {
        self.structured_action = Some(call);
        self
    }
}

/// Ordered, append-only history of one conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns all messages in order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no message has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the most recent message produced by `role`.
    #[must_use]
    pub fn last_from(&self, role: Role) -> Option<&Message> {
        self.messages.iter().rev().find(|message| message.role == role)
    }

    /// Iterates over the messages in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = core::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

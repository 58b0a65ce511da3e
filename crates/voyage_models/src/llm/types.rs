//! Core types for LLM generation requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ─────────────────────
// Request / Response
// ─────────────────────

/// A generation request to a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// System prompt for the model.
    pub system: Option<String>,
    /// The messages to send to the model.
    pub messages: Vec<Message>,
    /// Sampling temperature. `Some(0.0)` requests greedy decoding.
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    /// Creates a new generation request with a user message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use voyage_models::llm::GenerationRequest;
    ///
    /// let request = GenerationRequest::new("What's the weather like?");
    /// assert_eq!(request.messages.len(), 1);
    /// ```
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            system: None,
            messages: vec![Message::user(message)],
            temperature: None,
        }
    }

    /// Creates a new generation request with a system prompt and user message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use voyage_models::llm::GenerationRequest;
    ///
    /// let request = GenerationRequest::with_system(
    ///     "You are a helpful assistant",
    ///     "What's the weather like?"
    /// );
    /// assert!(request.system.is_some());
    /// ```
    #[must_use]
    pub fn with_system(system: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            messages: vec![Message::user(message)],
            temperature: None,
        }
    }

    /// Creates a request from a system prompt and a full message list.
    #[must_use]
    pub fn from_messages(system: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            system: Some(system.into()),
            messages,
            temperature: None,
        }
    }

    /// Adds conversation history before the current message.
    ///
    /// The messages provided will be prepended to the existing messages.
    #[must_use]
    pub fn history(mut self, mut messages: Vec<Message>) -> Self {
        messages.append(&mut self.messages);
        self.messages = messages;
        self
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A generation response from a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated content blocks.
    pub content: Vec<AssistantBlock>,
    /// Token usage information.
    pub usage: Usage,
}

impl GenerationResponse {
    /// Creates a response holding a single text block and no usage data.
    #[must_use]
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            content: vec![AssistantBlock::Text(text.into())],
            usage: Usage::default(),
        }
    }

    /// Returns all text content blocks concatenated into a single string.
    ///
    /// Reasoning blocks are skipped. Returns an empty string if no text
    /// content is found.
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                AssistantBlock::Text(text) => Some(text.as_str()),
                AssistantBlock::Reasoning(_) => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Number of tokens in the input.
    pub input_tokens: Option<u64>,
    /// Number of tokens in the output.
    pub output_tokens: Option<u64>,
    /// Total tokens (input + output).
    pub total_tokens: Option<u64>,
}

// ─────────────────────
// Messages
// ─────────────────────

/// An input (user) or output (assistant) message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    /// A message from the user.
    User {
        /// The content blocks of the user message.
        content: Vec<UserBlock>,
    },
    /// A message from the assistant.
    Assistant {
        /// The content blocks of the assistant message.
        content: Vec<AssistantBlock>,
    },
}

impl Message {
    /// Creates a user message with text content.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::User {
            content: vec![UserBlock::Text(text.into())],
        }
    }

    /// Creates an assistant message with text content.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::Assistant {
            content: vec![AssistantBlock::Text(text.into())],
        }
    }

    /// Returns the concatenated text of the message, ignoring reasoning blocks.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::User { content } => content
                .iter()
                .map(|block| match block {
                    UserBlock::Text(text) => text.as_str(),
                })
                .collect::<Vec<_>>()
                .join(""),
            Self::Assistant { content } => content
                .iter()
                .filter_map(|block| match block {
                    AssistantBlock::Text(text) => Some(text.as_str()),
                    AssistantBlock::Reasoning(_) => None,
                })
                .collect::<Vec<_>>()
                .join(""),
        }
    }
}

// ─────────────────────
// Content Blocks
// ─────────────────────

/// Content that can appear in a user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum UserBlock {
    /// Plain text content.
    Text(String),
}

/// Content that can appear in an assistant message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum AssistantBlock {
    /// Plain text content.
    Text(String),
    /// Reasoning/thinking content from the model.
    Reasoning(ReasoningBlock),
}

impl AssistantBlock {
    /// Creates a reasoning content block.
    #[must_use]
    pub fn reasoning(reasoning: impl Into<String>) -> Self {
        Self::Reasoning(ReasoningBlock {
            reasoning: vec![reasoning.into()],
        })
    }
}

/// Reasoning/thinking content emitted by reasoning models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningBlock {
    /// The reasoning steps or thoughts.
    pub reasoning: Vec<String>,
}

// ─────────────────────
// Tool Definitions
// ─────────────────────

/// Definition of a tool advertised to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Name of the tool (e.g., `get_flight_status`).
    pub name: String,
    /// Human-readable description of what the tool does.
    pub description: String,
    /// JSON Schema defining the tool's parameters.
    ///
    /// This should be an object schema with properties defining each parameter.
    /// Example:
    /// ```json
    /// {
    ///   "type": "object",
    ///   "properties": {
    ///     "flight_number": {"type": "string"},
    ///     "date": {"type": ["string", "null"]}
    ///   },
    ///   "required": ["flight_number"]
    /// }
    /// ```
    pub parameters: Value,
}

impl ToolDefinition {
    /// Returns the parameter names declared by the schema, in declaration order,
    /// paired with whether each one is required.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<(&str, bool)> {
        let required: Vec<&str> = self
            .parameters
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        self.parameters
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .keys()
                    .map(|name| (name.as_str(), required.contains(&name.as_str())))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn history_is_prepended() {
        let request = GenerationRequest::new("latest").history(vec![Message::assistant("earlier")]);
        assert_eq!(request.messages.len(), 2);
        assert!(matches!(request.messages[0], Message::Assistant { .. }));
        assert_eq!(request.messages[1].text(), "latest");
    }

    #[test]
    fn response_text_skips_reasoning() {
        let response = GenerationResponse {
            content: vec![
                AssistantBlock::reasoning("hmm"),
                AssistantBlock::Text("THOUGHT: ".to_string()),
                AssistantBlock::Text("done".to_string()),
            ],
            usage: Usage::default(),
        };
        assert_eq!(response.text(), "THOUGHT: done");
    }

    #[test]
    fn parameter_names_reports_required_flags() {
        let def = ToolDefinition {
            name: "get_flight_status".to_string(),
            description: "Get current Flight Status".to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "flight_number": {"type": "string"},
                    "date": {"type": ["string", "null"]}
                },
                "required": ["flight_number"]
            }),
        };
        let names = def.parameter_names();
        assert!(names.contains(&("flight_number", true)));
        assert!(names.contains(&("date", false)));
    }

    #[test]
    fn parameter_names_empty_for_non_object_schema() {
        let def = ToolDefinition {
            name: "noop".to_string(),
            description: String::new(),
            parameters: json!(true),
        };
        assert!(def.parameter_names().is_empty());
    }
}

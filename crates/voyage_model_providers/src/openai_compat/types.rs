//! Chat completions wire types.
//!
//! These types match the subset of the `OpenAI` chat completions API that
//! Ollama and other compatible servers implement.
//! See: <https://platform.openai.com/docs/api-reference/chat>

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request Types
// ─────────────────────────────────────────────────────────────────────────────

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// The model to use.
    pub model: String,
    /// Input messages, system prompt first.
    pub messages: Vec<ChatMessage>,
    /// Temperature for sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Always `false`; responses are read in one piece.
    pub stream: bool,
}

/// Message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Response body for `POST /chat/completions`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated choices; only the first is used.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Token accounting, when the server reports it.
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

/// A single generated choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The assistant message of a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Text content. `null` for refusals or tool-only replies.
    #[serde(default)]
    pub content: Option<String>,
    /// Thinking output of reasoning models (`reasoning_content` on some servers).
    #[serde(default, alias = "reasoning_content")]
    pub reasoning: Option<String>,
}

/// Token usage block.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompletionUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u64>,
    #[serde(default)]
    pub completion_tokens: Option<u64>,
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

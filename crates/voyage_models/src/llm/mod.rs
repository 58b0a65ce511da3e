//! LLM (Large Language Model) text generation.
//!
//! This module provides the [`LlmProvider`] trait implemented by backends, the
//! [`Llm`] handle used by consumers, and the request/response types exchanged
//! between them.

mod error;
mod model;
mod provider;
mod types;

pub use error::GenerationError;
pub use model::Llm;
pub use provider::LlmProvider;
pub use types::{
    AssistantBlock, GenerationRequest, GenerationResponse, Message, ReasoningBlock,
    ToolDefinition, Usage, UserBlock,
};

//! # Voyage Internal Library
//!
//! Re-exports the core Voyage crates for convenience.

/// Tool definitions and the tool registry.
pub use voyage_tools;

/// Reasoning backend abstraction.
pub use voyage_models;

/// Concrete reasoning backends.
pub use voyage_model_providers;

/// The planner/executor conversation loop.
pub use voyage_agent;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use voyage_agent::{
        AgentConfig, CancellationToken, ConversationError, ConversationOutcome,
        ConversationStatus, Executor, LlmPlanner, Message, Orchestrator, ParsedAction, Planner,
        Role, TerminationPredicate, Transcript,
    };
    pub use voyage_model_providers::OpenAiCompatProvider;
    pub use voyage_models::ModelRegistry;
    pub use voyage_models::llm::{Llm, LlmProvider};
    pub use voyage_tools::{FunctionCall, FunctionTool, Tool, ToolError, ToolRegistry, Toolset};
}

//! Error types for tool registration and execution.

use thiserror::Error;

/// Errors that can occur while registering, resolving, or executing tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A tool with the same name is already registered.
    #[error("Tool '{0}' is already registered")]
    DuplicateTool(String),

    /// No tool with the requested name is registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Error during parameter deserialization or parsing.
    #[error("Parameter error: {0}")]
    ParameterError(String),

    /// Error during tool function execution.
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ToolError {
    /// Creates a [`ParameterError`](Self::ParameterError).
    pub fn parameter_error(msg: impl Into<String>) -> Self {
        Self::ParameterError(msg.into())
    }

    /// Creates an [`ExecutionError`](Self::ExecutionError).
    pub fn execution_error(msg: impl Into<String>) -> Self {
        Self::ExecutionError(msg.into())
    }

    /// Returns `true` for registry lookup failures, as opposed to failures
    /// raised by a tool while it ran.
    #[must_use]
    pub fn is_unknown_tool(&self) -> bool {
        matches!(self, Self::UnknownTool(_))
    }
}

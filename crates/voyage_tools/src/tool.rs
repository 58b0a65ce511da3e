//! The core [`Tool`] trait for executable tools.

use crate::error::ToolError;
use core::future::Future;
use core::pin::Pin;
use voyage_models::llm::ToolDefinition;

/// Boxed future returned by [`Tool::execute`].
pub type ToolFuture<'a> =
    Pin<Box<dyn Future<Output = Result<serde_json::Value, ToolError>> + Send + 'a>>;

/// A tool that can be invoked by the executing agent.
///
/// Tools expose a [`ToolDefinition`] (name, description, JSON schema) that is
/// advertised to the planner, and an async [`execute`](Tool::execute) method
/// that receives the JSON object parameters of a call.
pub trait Tool: Send + Sync + 'static {
    /// Returns the planner-facing tool definition with JSON schema.
    fn definition(&self) -> ToolDefinition;

    /// Executes the tool with JSON arguments.
    fn execute(&self, args: serde_json::Value) -> ToolFuture<'_>;
}

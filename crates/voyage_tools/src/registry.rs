//! Tool registry.
//!
//! The [`ToolRegistry`] stores registered tools by name, in registration
//! order, and provides lookup and execution. It is populated once during
//! setup and then shared read-only, typically as `Arc<ToolRegistry>`.
//!
//! # Usage
//!
//! ```ignore
//! use voyage_tools::ToolRegistry;
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(my_tool())?;
//! registry.register_toolset(travel_tools())?;
//!
//! let registry = Arc::new(registry);
//! let tool = registry.resolve("get_flight_status")?;
//! ```

use crate::error::ToolError;
use crate::tool::Tool;
use crate::toolset::Toolset;
use indexmap::IndexMap;
use std::sync::Arc;
use voyage_models::llm::ToolDefinition;

struct Entry {
    tool: Arc<dyn Tool>,
    definition: ToolDefinition,
}

/// Registry of available tools.
///
/// Names are unique; registration order is preserved for listings.
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Entry>,
}

impl core::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Registers a tool.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::DuplicateTool`] if a tool with the same name is
    /// already registered. The registry is left unchanged.
    pub fn register(&mut self, tool: impl Tool) -> Result<(), ToolError> {
        self.register_shared(Arc::new(tool))
    }

    /// Registers a tool the caller keeps a handle to.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::DuplicateTool`] on a name conflict.
    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let definition = tool.definition();
        if self.tools.contains_key(&definition.name) {
            return Err(ToolError::DuplicateTool(definition.name));
        }
        tracing::debug!(tool = %definition.name, "registered tool");
        self.tools
            .insert(definition.name.clone(), Entry { tool, definition });
        Ok(())
    }

    /// Registers all tools from a toolset.
    ///
    /// Either every tool of the set is registered or none is.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::DuplicateTool`] if any name conflicts with an
    /// already-registered tool or with another tool of the same set.
    pub fn register_toolset(&mut self, toolset: impl Toolset) -> Result<(), ToolError> {
        let mut pending: IndexMap<String, Entry> = IndexMap::new();
        for tool in toolset.tools() {
            let definition = tool.definition();
            if self.tools.contains_key(&definition.name) || pending.contains_key(&definition.name)
            {
                return Err(ToolError::DuplicateTool(definition.name));
            }
            pending.insert(
                definition.name.clone(),
                Entry {
                    tool: Arc::from(tool),
                    definition,
                },
            );
        }
        tracing::debug!(count = pending.len(), "registered toolset");
        self.tools.extend(pending);
        Ok(())
    }

    /// Returns the handler registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTool`] if no such tool exists.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Tool>, ToolError> {
        self.tools
            .get(name)
            .map(|entry| Arc::clone(&entry.tool))
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }

    /// Resolves and executes a tool by name with JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTool`] for unregistered names, or the
    /// tool's own error.
    pub async fn execute(
        &self,
        name: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let tool = self.resolve(name)?;
        tool.execute(args).await
    }

    /// Returns `(name, description)` pairs in registration order.
    #[must_use]
    pub fn describe_all(&self) -> Vec<(&str, &str)> {
        self.tools
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.definition.description.as_str()))
            .collect()
    }

    /// Returns tool definitions for all registered tools.
    #[must_use]
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|entry| entry.definition.clone())
            .collect()
    }

    /// Returns whether a tool with the given name is registered.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Returns the names of all registered tools.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns `true` if no tools are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

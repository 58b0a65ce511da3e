//! Grouped tool registration.

use crate::tool::Tool;

/// A group of tools registered together through
/// [`ToolRegistry::register_toolset`](crate::ToolRegistry::register_toolset).
pub trait Toolset {
    /// Consumes the set and returns its tools in registration order.
    fn tools(self) -> Vec<Box<dyn Tool>>;
}

impl Toolset for Vec<Box<dyn Tool>> {
    fn tools(self) -> Vec<Box<dyn Tool>> {
        self
    }
}

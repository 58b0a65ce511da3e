//! Tool framework for Voyage agents.
//!
//! This crate provides the infrastructure for defining, registering, and
//! executing tools that an executing agent can call on behalf of a planner.
//! Tools are registered explicitly; every registration returns a `Result`.
//!
//! # Quick Start
//!
//! ```
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use voyage_tools::{FunctionTool, ToolError, ToolRegistry};
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct EchoArgs {
//!     text: String,
//! }
//!
//! let mut registry = ToolRegistry::new();
//! registry
//!     .register(FunctionTool::new("echo", "Echo the input", |args: EchoArgs| {
//!         Ok::<_, ToolError>(args.text)
//!     }))
//!     .unwrap();
//!
//! assert!(registry.has("echo"));
//! assert!(registry.register(FunctionTool::new("echo", "again", |args: EchoArgs| {
//!     Ok::<_, ToolError>(args.text)
//! })).is_err());
//! ```
//!
//! # Architecture
//!
//! - [`Tool`] — trait for executable tools with JSON schema
//! - [`FunctionTool`] — a [`Tool`] built from a plain function
//! - [`Toolset`] — trait for groups of tools registered together
//! - [`ToolRegistry`] — stores and dispatches tools
//! - [`FunctionCall`] — a tool name with JSON object parameters

pub mod error;
pub mod function;
pub mod param;
pub mod registry;
pub mod tool;
pub mod toolset;

// Re-export core types at crate root.
pub use error::ToolError;
pub use function::FunctionTool;
pub use param::FunctionCall;
pub use registry::ToolRegistry;
pub use tool::Tool;
pub use toolset::Toolset;

//! Reasoning backend interface and registry for Voyage.
//!
//! Provides a unified interface for text-completion backends, decoupling the
//! agent loop from any particular provider implementation.
//!
//! # Overview
//!
//! - Provider-agnostic: the planner depends only on this crate, not on a
//!   specific provider crate.
//!
//! - Pluggable providers: provider implementations are registered with a
//!   [`ModelRegistry`] at startup, so a model can be swapped by changing its
//!   identifier in configuration.
//!
//! # Example
//!
//! ```ignore
//! use voyage_models::ModelRegistry;
//! use voyage_models::llm::GenerationRequest;
//!
//! let mut registry = ModelRegistry::new();
//! registry.register_llm_provider("ollama", Arc::new(provider))?;
//!
//! let llm = registry.llm("ollama/llama3.2")?;
//! let request = GenerationRequest::with_system("You are helpful", "Hello!").temperature(0.0);
//! let response = llm.generate(request).await?;
//! ```

pub mod error;
pub mod llm;
mod registry;

pub use registry::ModelRegistry;

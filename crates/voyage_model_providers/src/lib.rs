//! Reasoning backend implementations for Voyage.
//!
//! Each provider implements [`LlmProvider`](voyage_models::llm::LlmProvider) and is
//! registered with a [`ModelRegistry`](voyage_models::ModelRegistry) under a
//! provider name, giving standardized access through `"provider/model"` identifiers.
//!
//! # Supported Providers
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`OpenAiCompatProvider`] | Any `/chat/completions` endpoint: Ollama, vLLM, `OpenAI` |
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use voyage_model_providers::OpenAiCompatProvider;
//! use voyage_models::ModelRegistry;
//!
//! let provider = OpenAiCompatProvider::new("http://localhost:11434/v1", "ollama");
//!
//! let mut registry = ModelRegistry::new();
//! registry
//!     .register_llm_provider("ollama", Arc::new(provider))
//!     .expect("first registration");
//! let llm = registry.llm("ollama/llama3.2").expect("provider is registered");
//! ```

pub mod openai_compat;

pub use openai_compat::OpenAiCompatProvider;

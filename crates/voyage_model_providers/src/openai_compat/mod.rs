//! `OpenAI`-compatible chat completions backend.
//!
//! Talks to any server exposing `POST {base_url}/chat/completions`, which
//! covers a local Ollama daemon (`http://localhost:11434/v1`) as well as the
//! hosted `OpenAI` API.
//!
//! ```no_run
//! # use voyage_model_providers::openai_compat::OpenAiCompatProvider;
//! let provider = OpenAiCompatProvider::new("http://localhost:11434/v1", "ollama");
//! ```

mod client;
mod provider;
mod types;

pub use client::OpenAiCompatClient;
pub use provider::OpenAiCompatProvider;

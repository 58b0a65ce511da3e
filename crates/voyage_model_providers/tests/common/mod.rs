//! Shared test helpers for provider integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::future::Future;
use std::sync::Once;

use serde_json::{Value, json};
use voyage_models::llm::{GenerationRequest, Llm};

static INIT: Once = Once::new();

/// Initialize environment variables from `.env` file (once).
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

/// Builds a chat completions response body with a single text choice.
pub fn completion_body(text: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
    })
}

/// Extension trait for exercising a live LLM backend.
pub trait LlmTestExt {
    /// Tests basic generation - expects the model to say "hello".
    fn test_basic_generation(&self) -> impl Future<Output = ()> + Send;

    /// Tests that the model follows the ReAct action format when asked to.
    fn test_react_format(&self) -> impl Future<Output = ()> + Send;

    /// Tests that an invalid model returns an error.
    fn test_invalid_model_error(&self) -> impl Future<Output = ()> + Send;
}

impl LlmTestExt for Llm {
    async fn test_basic_generation(&self) {
        let request = GenerationRequest::new("Say the word hello and nothing else.").temperature(0.0);

        let response = self
            .generate(request)
            .await
            .expect("generation should succeed");

        let text = response.text().to_lowercase();
        assert!(text.contains("hello"), "response should contain hello: {text}");
    }

    async fn test_react_format(&self) {
        let request = GenerationRequest::with_system(
            "Always answer with exactly one line of the form\nACTION: <tool_name> {json arguments}",
            "Look up the status of flight AA123 using the get_flight_status tool.",
        )
        .temperature(0.0);

        let response = self
            .generate(request)
            .await
            .expect("generation should succeed");

        let text = response.text();
        assert!(
            text.to_uppercase().contains("ACTION"),
            "response should contain an ACTION line: {text}"
        );
    }

    async fn test_invalid_model_error(&self) {
        let request = GenerationRequest::new("Hello");
        let result = self.generate(request).await;

        assert!(result.is_err(), "should fail with invalid model");
    }
}

//! Shared helpers for travel planner tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use voyage_models::llm::{
    GenerationError, GenerationRequest, GenerationResponse, Llm, LlmProvider,
};

/// A backend that replays fixed completions and records each request.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedBackend {
    pub fn new<I, S>(replies: I) -> Arc<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Returns the requests received so far.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedBackend {
    async fn generate(
        &self,
        _model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .map(GenerationResponse::text_only)
            .ok_or_else(|| GenerationError::Http("script exhausted".to_string()))
    }
}

/// Wraps a scripted backend in an [`Llm`] handle.
pub fn scripted_llm(backend: &Arc<ScriptedBackend>) -> Llm {
    Llm::from_provider(Arc::clone(backend) as Arc<dyn LlmProvider>, "scripted")
}

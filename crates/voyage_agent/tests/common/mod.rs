//! Shared helpers for conversation tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use voyage_agent::{CancellationToken, ConversationError, Message, Planner, Transcript};
use voyage_models::llm::GenerationError;
use voyage_tools::{FunctionTool, ToolError, ToolRegistry};

/// A planner that replays a fixed list of replies, repeating the last one.
pub struct ScriptedPlanner {
    replies: Mutex<VecDeque<String>>,
    last: Mutex<String>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedPlanner {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            last: Mutex::new(String::new()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Returns a handle counting `propose` calls.
    pub fn call_counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Planner for ScriptedPlanner {
    async fn propose(
        &self,
        _query: &str,
        _transcript: &Transcript,
    ) -> Result<Message, ConversationError> {
        *self.calls.lock().unwrap() += 1;
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.replies.lock().unwrap().pop_front() {
            *last = next;
        }
        Ok(Message::planner(last.clone()))
    }
}

/// A planner whose backend is always down.
pub struct UnavailablePlanner;

#[async_trait]
impl Planner for UnavailablePlanner {
    async fn propose(
        &self,
        _query: &str,
        _transcript: &Transcript,
    ) -> Result<Message, ConversationError> {
        Err(GenerationError::Http("connection refused".to_string()).into())
    }
}

/// A planner that cancels the conversation while producing its reply.
pub struct CancellingPlanner {
    pub token: CancellationToken,
    pub reply: String,
}

#[async_trait]
impl Planner for CancellingPlanner {
    async fn propose(
        &self,
        _query: &str,
        _transcript: &Transcript,
    ) -> Result<Message, ConversationError> {
        self.token.cancel();
        Ok(Message::planner(self.reply.clone()))
    }
}

#[derive(Deserialize, JsonSchema)]
pub struct FlightArgs {
    pub flight_number: String,
}

/// A registry holding a single `get_flight_status` tool.
pub fn flight_registry() -> Arc<ToolRegistry> {
    let mut registry = ToolRegistry::new();
    registry
        .register(FunctionTool::new(
            "get_flight_status",
            "Get current Flight Status",
            |args: FlightArgs| {
                Ok::<_, ToolError>(json!({
                    "flight_number": args.flight_number,
                    "status": "On Time"
                }))
            },
        ))
        .unwrap();
    Arc::new(registry)
}

/// Like [`flight_registry`], also returning a count of tool invocations.
pub fn counting_flight_registry() -> (Arc<ToolRegistry>, Arc<AtomicUsize>) {
    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&invocations);
    let mut registry = ToolRegistry::new();
    registry
        .register(FunctionTool::new(
            "get_flight_status",
            "Get current Flight Status",
            move |args: FlightArgs| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ToolError>(json!({
                    "flight_number": args.flight_number,
                    "status": "On Time"
                }))
            },
        ))
        .unwrap();
    (Arc::new(registry), invocations)
}

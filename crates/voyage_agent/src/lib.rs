//! ReAct conversation loop between a planner and an executor.
//!
//! A [`Planner`] proposes the next step as text in the THOUGHT / ACTION /
//! OBSERVATION format. An [`Executor`] runs the named tool from a shared
//! [`ToolRegistry`](voyage_tools::ToolRegistry) and answers with an
//! observation. The [`Orchestrator`] alternates the two roles over one
//! ordered [`Transcript`] until a [`TerminationPredicate`] accepts a message
//! or the turn ceiling is reached.
//!
//! # Architecture
//!
//! ```text
//!  query ──▶ AwaitingPlanner ──propose──▶ AwaitingExecutor
//!                 ▲                            │
//!                 └──────────execute───────────┘
//!
//!  terminal message ──▶ Terminated
//!  backend error, turn limit, cancellation, inspection error ──▶ Failed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use voyage_agent::{AgentConfig, Executor, LlmPlanner, Orchestrator};
//!
//! let registry = Arc::new(registry);
//! let planner = LlmPlanner::for_registry(llm, &registry);
//! let orchestrator = Orchestrator::new(planner, Executor::new(registry))
//!     .with_config(&AgentConfig::default());
//!
//! let outcome = orchestrator.start("What is the status of flight AA123?").await;
//! println!("{}", outcome.summary);
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod executor;
pub mod message;
pub mod orchestrator;
pub mod planner;
pub mod termination;

pub use action::{ActionParseError, ParsedAction, parse_action};
pub use config::{AgentConfig, InspectionPolicy};
pub use error::ConversationError;
pub use executor::{Executor, ExecutorTurn};
pub use message::{Message, Role, Transcript};
pub use orchestrator::{
    ConversationOutcome, ConversationState, ConversationStatus, Orchestrator, summarize,
};
pub use planner::{LlmPlanner, Planner};
pub use termination::{InspectionError, PhraseScope, TerminationPredicate};

/// Cancellation handle accepted by [`Orchestrator::start_with_cancellation`].
pub use tokio_util::sync::CancellationToken;

//! Building blocks for ReAct-style tool-using agents in Rust.
//!
//! A planner model proposes one action per turn, an executor runs the named
//! tool, and the conversation ends when the planner signals completion or the
//! turn limit is reached.

pub use voyage_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use voyage_internal::prelude::*;
}

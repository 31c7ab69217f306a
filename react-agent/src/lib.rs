//! # react-agent
//!
//! A reasoning-and-acting (ReAct) control loop. The agent asks a text
//! generator for the next turn, parses that turn into either a tool call or a
//! final answer, runs the named tool, and feeds the observation back until it
//! gets an answer or runs out of iterations.
//!
//! ## Quick Start
//!
//! ```rust
//! use react_agent::{ReActAgent, ToolRegistry};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let mut tools = ToolRegistry::new();
//! tools.register("capital", "Look up a country's capital", |country: &str| {
//!     match country {
//!         "France" => "Paris".to_string(),
//!         _ => "unknown".to_string(),
//!     }
//! });
//!
//! let turn = AtomicUsize::new(0);
//! let generator = move |_transcript: &str| match turn.fetch_add(1, Ordering::SeqCst) {
//!     0 => "Thought: look it up\nAction: capital\nAction Input: France".to_string(),
//!     _ => "Thought: I now know the answer\nFinal Answer: Paris".to_string(),
//! };
//!
//! let agent = ReActAgent::new(generator, tools);
//! let result = agent.run("What is the capital of France?").unwrap();
//!
//! assert!(result.success);
//! assert_eq!(result.answer, "Paris");
//! assert_eq!(result.steps[0].observation, "Paris");
//! ```

#![warn(clippy::all)]

// Error types (must be first for other modules to use)
pub mod error;

pub mod agent;
pub mod config;
pub mod logging;
pub mod models;
pub mod parser;
pub mod tools;

pub use agent::ReActAgent;
pub use config::{AgentConfig, DEFAULT_MAX_ITERATIONS};
pub use error::{BoxError, ConfigError, ReactError, Result};
pub use models::{AgentResult, AgentStep, TextGenerator, MAX_ITERATIONS_ANSWER};
pub use parser::{parse, ParsedIntent};
pub use tools::{FunctionTool, Tool, ToolRegistry};

/// Current version of react-agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

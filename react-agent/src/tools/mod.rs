//! Tool system for the agent loop.
//!
//! Tools are named string-to-string callables. The registry owns them and
//! dispatches by name; the agent renders their descriptions into its prompt.

mod base_tool;
mod function_tool;
mod registry;

pub use base_tool::{IntoToolOutput, Tool, ToolSchema};
pub use function_tool::{FunctionTool, ToolFunction};
pub use registry::ToolRegistry;

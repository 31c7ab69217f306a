//! Tool registry for registering, looking up and dispatching tools by name.

use tracing::{debug, info};

use crate::error::{ReactError, Result};
use super::base_tool::{IntoToolOutput, Tool};
use super::function_tool::FunctionTool;

/// Registry mapping tool names to tools.
///
/// Enumeration follows registration order. Registering a name that already
/// exists replaces the previous tool in its original slot.
///
/// # Example
///
/// ```rust
/// use react_agent::tools::ToolRegistry;
///
/// let mut registry = ToolRegistry::new();
/// registry.register("search", "Search the web", |q: &str| format!("results for {q}"));
/// registry.register("calc", "Do math", |q: &str| q.to_string());
///
/// assert_eq!(registry.describe(), "- search: Search the web\n- calc: Do math");
/// assert_eq!(registry.execute("search", "rust").unwrap(), "results for rust");
/// assert!(registry.execute("missing", "").is_err());
/// ```
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a closure as a tool, replacing any tool with the same name
    pub fn register<F, R>(&mut self, name: impl Into<String>, description: impl Into<String>, func: F)
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: IntoToolOutput,
    {
        self.register_tool(FunctionTool::new(name, description, func));
    }

    /// Register any [`Tool`] implementation, replacing any tool with the same name
    pub fn register_tool<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        match self.position(&name) {
            Some(pos) => {
                self.tools[pos] = Box::new(tool);
                debug!(tool = %name, "Replaced tool");
            }
            None => {
                self.tools.push(Box::new(tool));
                debug!(tool = %name, "Registered tool");
            }
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    /// All registered tools in registration order
    pub fn list(&self) -> &[Box<dyn Tool>] {
        &self.tools
    }

    /// All registered tool names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Execute a tool by name
    ///
    /// # Errors
    /// `ToolNotFound` when no tool has that name, `ToolFailed` when the tool
    /// function returns an error. Neither is caught here.
    pub fn execute(&self, name: &str, input: &str) -> Result<String> {
        let tool = self.get(name).ok_or_else(|| ReactError::tool_not_found(name))?;

        info!(tool = %name, input = %input, "Executing tool");

        match tool.run(input) {
            Ok(output) => {
                debug!(tool = %name, output_len = output.len(), "Tool executed successfully");
                Ok(output)
            }
            Err(source) => {
                debug!(tool = %name, error = %source, "Tool execution failed");
                Err(ReactError::ToolFailed {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }

    /// One `- {name}: {description}` line per tool, newline-joined
    pub fn describe(&self) -> String {
        self.tools
            .iter()
            .map(|tool| tool.describe())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tools.iter().position(|tool| tool.name() == name)
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

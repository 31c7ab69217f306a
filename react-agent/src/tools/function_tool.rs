//! Function tool implementation for wrapping Rust closures as tools.

use std::fmt;

use crate::error::BoxError;
use super::base_tool::{IntoToolOutput, Tool};

/// Type alias for the boxed function a [`FunctionTool`] invokes
pub type ToolFunction = Box<dyn Fn(&str) -> Result<String, BoxError> + Send + Sync>;

/// Create custom tools by wrapping Rust closures.
///
/// # Example
///
/// ```rust
/// use react_agent::tools::{FunctionTool, Tool};
///
/// let upper = FunctionTool::new("upper", "Uppercase the input", |input: &str| {
///     input.to_uppercase()
/// });
///
/// assert_eq!(upper.name(), "upper");
/// assert_eq!(upper.run("abc").unwrap(), "ABC");
/// ```
pub struct FunctionTool {
    /// The name of the tool
    name: String,
    /// The description of the tool
    description: String,
    /// The function to execute
    function: ToolFunction,
}

impl FunctionTool {
    /// Create a new function tool
    ///
    /// # Arguments
    /// * `name` - The name of the tool
    /// * `description` - Description of what the tool does
    /// * `func` - Closure returning `String` or `Result<String, E>`
    pub fn new<F, R>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
        R: IntoToolOutput,
    {
        Self {
            name: name.into(),
            description: description.into(),
            function: Box::new(move |input| func(input).into_tool_output()),
        }
    }
}

impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(&self, input: &str) -> Result<String, BoxError> {
        (self.function)(input)
    }
}

impl fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Helper macro for creating function tools from closures
#[macro_export]
macro_rules! function_tool {
    ($name:expr, $description:expr, $func:expr) => {
        $crate::tools::FunctionTool::new($name, $description, $func)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_tool_returns_verbatim_output() {
        let tool = FunctionTool::new("empty", "Always empty", |_: &str| String::new());
        assert_eq!(tool.run("anything").unwrap(), "");
    }

    #[test]
    fn test_function_tool_propagates_error() {
        let tool = FunctionTool::new("divide", "Divide by the input", |input: &str| {
            let divisor: i64 = input.trim().parse().map_err(|_| "not a number".to_string())?;
            if divisor == 0 {
                return Err("division by zero".to_string());
            }
            Ok((100 / divisor).to_string())
        });

        assert_eq!(tool.run("4").unwrap(), "25");
        assert_eq!(tool.run("0").unwrap_err().to_string(), "division by zero");
        assert_eq!(tool.run("x").unwrap_err().to_string(), "not a number");
    }

    #[test]
    fn test_function_tool_macro() {
        let tool = function_tool!("shout", "Shout the input", |input: &str| format!("{input}!"));
        assert_eq!(tool.name(), "shout");
        assert_eq!(tool.run("hey").unwrap(), "hey!");
    }

    #[test]
    fn test_debug_omits_function() {
        let tool = FunctionTool::new("id", "Identity", |input: &str| input.to_string());
        let rendered = format!("{tool:?}");
        assert!(rendered.contains("FunctionTool"));
        assert!(rendered.contains("Identity"));
    }
}

//! The `Tool` trait and the conversions tool functions may return.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BoxError;

/// A named, described, string-in/string-out callable the agent can dispatch to.
///
/// Implementors must be `Send + Sync` so a registry can back an agent that is
/// shared by reference across threads.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// Invoke the tool with free-form input and return its observation.
    fn run(&self, input: &str) -> Result<String, BoxError>;

    /// Descriptor line rendered into the agent prompt
    fn describe(&self) -> String {
        format!("- {}: {}", self.name(), self.description())
    }

    /// Snapshot of the tool's identity, without its behavior
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
        }
    }
}

/// Serializable identity of a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
}

/// Conversion from a tool function's return value into the tool's result.
///
/// Implemented for infallible functions returning `String` or `&'static str`,
/// and for fallible functions returning `Result<String, E>`.
pub trait IntoToolOutput {
    fn into_tool_output(self) -> Result<String, BoxError>;
}

impl IntoToolOutput for String {
    fn into_tool_output(self) -> Result<String, BoxError> {
        Ok(self)
    }
}

impl IntoToolOutput for &'static str {
    fn into_tool_output(self) -> Result<String, BoxError> {
        Ok(self.to_string())
    }
}

impl<E> IntoToolOutput for Result<String, E>
where
    E: Into<BoxError>,
{
    fn into_tool_output(self) -> Result<String, BoxError> {
        self.map_err(|e| {
            let err = e.into();
            debug!(error = %err, "tool function returned an error");
            err
        })
    }
}

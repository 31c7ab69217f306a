//! Error handling for react-agent

use thiserror::Error;

/// Boxed error used for opaque tool and generator failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for react-agent operations
pub type Result<T> = std::result::Result<T, ReactError>;

/// Main error type for the react-agent library
#[derive(Debug, Error)]
pub enum ReactError {
    /// No tool is registered under the requested name
    #[error("Tool '{name}' not found")]
    ToolNotFound {
        /// Requested tool name
        name: String,
    },
    /// The generated text carries neither a final answer nor an action
    #[error("Could not parse action from LLM output: {preview}")]
    MalformedOutput {
        /// Leading slice of the offending text
        preview: String,
    },
    /// A tool raised an error while running
    #[error("{source}")]
    ToolFailed {
        /// Tool that failed
        name: String,
        /// Error raised by the tool function
        #[source]
        source: BoxError,
    },
    /// The generation function failed
    #[error("Generation failed: {0}")]
    Generation(#[source] BoxError),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid value for '{key}': '{value}' (expected: {expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
    /// Configuration parsing failed
    #[error("Failed to parse configuration '{path}': {reason}")]
    ParsingFailed { path: String, reason: String },
}

/// Maximum number of characters of generated text kept in a `MalformedOutput` error.
pub const MALFORMED_PREVIEW_CHARS: usize = 100;

impl ReactError {
    /// Create a `ToolNotFound` error
    pub fn tool_not_found<S: Into<String>>(name: S) -> Self {
        ReactError::ToolNotFound { name: name.into() }
    }

    /// Create a `MalformedOutput` error keeping only the first
    /// [`MALFORMED_PREVIEW_CHARS`] characters of `text`
    pub fn malformed_output(text: &str) -> Self {
        ReactError::MalformedOutput {
            preview: text.chars().take(MALFORMED_PREVIEW_CHARS).collect(),
        }
    }

    /// Wrap a generator failure
    pub fn generation<E: Into<BoxError>>(err: E) -> Self {
        ReactError::Generation(err.into())
    }

    /// Whether the control loop turns this error into an observation
    /// instead of ending the run
    pub fn is_tool_error(&self) -> bool {
        matches!(
            self,
            ReactError::ToolNotFound { .. } | ReactError::ToolFailed { .. }
        )
    }
}

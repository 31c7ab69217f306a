//! Structured events emitted by the agent loop.
//!
//! Each event serializes to a JSON object with a `type` field and is logged
//! through `tracing` using its `Display` form.

use serde::{Deserialize, Serialize};

/// Event for logging a generation call
#[derive(Debug, Serialize, Deserialize)]
pub struct LlmCallEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub run_id: String,
    pub iteration: usize,
    pub prompt_len: usize,
    pub response_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl LlmCallEvent {
    pub fn new(run_id: &str, iteration: usize, prompt: &str, response: &str) -> Self {
        Self {
            event_type: "LLMCall".to_string(),
            run_id: run_id.to_string(),
            iteration,
            prompt_len: prompt.len(),
            response_len: response.len(),
            response: None,
        }
    }

    /// Attach the raw generated text
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = Some(response.to_string());
        self
    }
}

impl std::fmt::Display for LlmCallEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "LlmCallEvent serialization error"),
        }
    }
}

/// Event for logging tool calls
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolCallEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub run_id: String,
    pub tool_name: String,
    pub input: String,
    pub observation: String,
    pub is_error: bool,
}

impl ToolCallEvent {
    pub fn new(
        run_id: &str,
        tool_name: &str,
        input: &str,
        observation: &str,
        is_error: bool,
    ) -> Self {
        Self {
            event_type: "ToolCall".to_string(),
            run_id: run_id.to_string(),
            tool_name: tool_name.to_string(),
            input: input.to_string(),
            observation: observation.to_string(),
            is_error,
        }
    }
}

impl std::fmt::Display for ToolCallEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "ToolCallEvent serialization error"),
        }
    }
}

/// Event for logging the end of a run
#[derive(Debug, Serialize, Deserialize)]
pub struct RunCompletedEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub run_id: String,
    pub success: bool,
    pub steps: usize,
    pub transcript_len: usize,
}

impl RunCompletedEvent {
    pub fn new(run_id: &str, success: bool, steps: usize, transcript_len: usize) -> Self {
        Self {
            event_type: "RunCompleted".to_string(),
            run_id: run_id.to_string(),
            success,
            steps,
            transcript_len,
        }
    }
}

impl std::fmt::Display for RunCompletedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "RunCompletedEvent serialization error"),
        }
    }
}

/// Install a global `tracing` subscriber.
///
/// `filter` uses `EnvFilter` syntax and is overridden by `RUST_LOG` when set.
/// Returns `false` if a subscriber was already installed.
#[cfg(feature = "subscriber")]
pub fn init_tracing(filter: &str, json: bool) -> bool {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

//! Parser for the text convention the agent and the generator share.
//!
//! A turn either requests a tool:
//!
//! ```text
//! Thought: <single line>
//! Action: <tool name>
//! Action Input: <single line>
//! ```
//!
//! or ends the run:
//!
//! ```text
//! Thought: <single line>
//! Final Answer: <free text, may span lines>
//! ```
//!
//! Each marker is located independently, so out-of-order or noisy output
//! still decodes as long as the markers themselves are intact. `Final Answer:`
//! wins over `Action:` when both appear.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ReactError, Result};

pub const THOUGHT_MARKER: &str = "Thought:";
pub const ACTION_MARKER: &str = "Action:";
pub const ACTION_INPUT_MARKER: &str = "Action Input:";
pub const OBSERVATION_MARKER: &str = "Observation:";
pub const FINAL_ANSWER_MARKER: &str = "Final Answer:";

static THOUGHT_RE: Lazy<Regex> = Lazy::new(|| single_line(THOUGHT_MARKER));
static ACTION_RE: Lazy<Regex> = Lazy::new(|| single_line(ACTION_MARKER));
static ACTION_INPUT_RE: Lazy<Regex> = Lazy::new(|| single_line(ACTION_INPUT_MARKER));
static FINAL_ANSWER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?s){}(.*)", regex::escape(FINAL_ANSWER_MARKER)))
        .expect("final answer pattern is valid")
});

/// Marker followed by the rest of its line
fn single_line(marker: &str) -> Regex {
    Regex::new(&format!(r"{}([^\n]*)", regex::escape(marker))).expect("marker pattern is valid")
}

/// Structured reading of one generated turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParsedIntent {
    /// The generator asks for a tool to be run
    ToolCall {
        thought: String,
        action: String,
        action_input: String,
    },
    /// The generator has produced its answer
    FinalAnswer { thought: String, answer: String },
}

impl ParsedIntent {
    pub fn thought(&self) -> &str {
        match self {
            ParsedIntent::ToolCall { thought, .. } | ParsedIntent::FinalAnswer { thought, .. } => thought,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, ParsedIntent::FinalAnswer { .. })
    }
}

/// Decode generated text into a [`ParsedIntent`].
///
/// # Errors
/// `MalformedOutput` when the text has no `Final Answer:` and no non-empty
/// `Action:` line. The error keeps only the first 100 characters of `text`.
///
/// # Example
///
/// ```rust
/// use react_agent::parser::{parse, ParsedIntent};
///
/// let intent = parse("Thought: look it up\nAction: search\nAction Input: rust").unwrap();
/// assert_eq!(
///     intent,
///     ParsedIntent::ToolCall {
///         thought: "look it up".to_string(),
///         action: "search".to_string(),
///         action_input: "rust".to_string(),
///     }
/// );
/// ```
pub fn parse(text: &str) -> Result<ParsedIntent> {
    let thought = capture(&THOUGHT_RE, text).unwrap_or_default();

    if let Some(answer) = capture(&FINAL_ANSWER_RE, text) {
        return Ok(ParsedIntent::FinalAnswer { thought, answer });
    }

    let action = capture(&ACTION_RE, text)
        .filter(|action| !action.is_empty())
        .ok_or_else(|| ReactError::malformed_output(text))?;
    let action_input = capture(&ACTION_INPUT_RE, text).unwrap_or_default();

    Ok(ParsedIntent::ToolCall {
        thought,
        action,
        action_input,
    })
}

/// First match of `re` in `text`, trimmed
fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

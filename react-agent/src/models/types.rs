use serde::{Deserialize, Serialize};

/// Answer reported when the loop runs out of iterations
pub const MAX_ITERATIONS_ANSWER: &str = "Max iterations reached";

/// A single Thought-Action-Observation round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStep {
    pub thought: String,
    pub action: String,
    pub action_input: String,
    /// Tool output, or `Error: {message}` when the tool failed
    pub observation: String,
}

impl AgentStep {
    pub fn new(
        thought: impl Into<String>,
        action: impl Into<String>,
        action_input: impl Into<String>,
        observation: impl Into<String>,
    ) -> Self {
        Self {
            thought: thought.into(),
            action: action.into(),
            action_input: action_input.into(),
            observation: observation.into(),
        }
    }
}

/// Outcome of an agent run, including every completed step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResult {
    pub answer: String,
    #[serde(default)]
    pub steps: Vec<AgentStep>,
    #[serde(default = "default_success")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}

impl AgentResult {
    /// A successful result with no steps. Each call allocates its own step list.
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            steps: Vec::new(),
            success: true,
        }
    }

    /// Result for a run that ended on a final answer
    pub fn finished(answer: impl Into<String>, steps: Vec<AgentStep>) -> Self {
        Self {
            answer: answer.into(),
            steps,
            success: true,
        }
    }

    /// Result for a run that exhausted its iteration budget
    pub fn max_iterations_reached(steps: Vec<AgentStep>) -> Self {
        Self {
            answer: MAX_ITERATIONS_ANSWER.to_string(),
            steps,
            success: false,
        }
    }

    pub fn last_observation(&self) -> Option<&str> {
        self.steps.last().map(|step| step.observation.as_str())
    }
}

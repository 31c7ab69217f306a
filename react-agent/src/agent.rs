//! ReAct agent: the reasoning-and-acting control loop.
//!
//! The agent renders a prompt describing its tools and the turn convention,
//! then alternates between asking the generator for the next turn and running
//! the tool that turn names. Each observation is appended to the transcript so
//! the next generation call sees the whole history.
//!
//! Tool failures (including unknown tool names) are reported back to the
//! generator as `Error: ...` observations. Generator failures and unparseable
//! turns end the run with an error.

use std::fmt;

use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::config::AgentConfig;
use crate::error::{ReactError, Result};
use crate::logging::{LlmCallEvent, RunCompletedEvent, ToolCallEvent};
use crate::models::{AgentResult, AgentStep, TextGenerator};
use crate::parser::{parse, ParsedIntent, OBSERVATION_MARKER};
use crate::tools::ToolRegistry;

/// Agent that follows the ReAct (Reasoning + Acting) pattern.
///
/// # Example
///
/// ```rust
/// use react_agent::{ReActAgent, ToolRegistry};
///
/// let mut tools = ToolRegistry::new();
/// tools.register("search", "Search the web", |q: &str| format!("results for {q}"));
///
/// let agent = ReActAgent::new(
///     |_prompt: &str| "Thought: I know\nFinal Answer: 42".to_string(),
///     tools,
/// );
///
/// let result = agent.run("What is the answer?").unwrap();
/// assert_eq!(result.answer, "42");
/// assert!(result.steps.is_empty());
/// assert!(result.success);
/// ```
pub struct ReActAgent {
    generator: Box<dyn TextGenerator>,
    tools: ToolRegistry,
    config: AgentConfig,
}

impl ReActAgent {
    /// Create an agent with the default configuration (10 iterations)
    pub fn new<G>(generator: G, tools: ToolRegistry) -> Self
    where
        G: TextGenerator + 'static,
    {
        Self {
            generator: Box::new(generator),
            tools,
            config: AgentConfig::default(),
        }
    }

    /// Create an agent from a configuration, validating it first
    pub fn from_config<G>(generator: G, tools: ToolRegistry, config: AgentConfig) -> Result<Self>
    where
        G: TextGenerator + 'static,
    {
        config.validate()?;
        Ok(Self {
            generator: Box::new(generator),
            tools,
            config,
        })
    }

    /// Replace the iteration cap
    ///
    /// # Errors
    /// `Config` when `max_iterations` is zero.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Result<Self> {
        let config = self.config.clone().with_max_iterations(max_iterations);
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Render the opening transcript for `question`
    pub fn build_prompt(&self, question: &str) -> String {
        format!(
            "Answer the following question using the available tools.\n\n\
             Tools:\n{tools}\n\n\
             Use this format:\n\
             Thought: reason about what to do\n\
             Action: tool_name\n\
             Action Input: input for the tool\n\
             Observation: tool result\n\
             ... (repeat as needed)\n\
             Thought: I now know the answer\n\
             Final Answer: the final answer\n\n\
             Question: {question}\n",
            tools = self.tools.describe(),
        )
    }

    /// Execute the ReAct loop for a question.
    ///
    /// Prompts the generator and runs the requested tools until a final
    /// answer arrives or the iteration cap is used up. Running out of
    /// iterations is not an error: the result carries `success == false`.
    ///
    /// # Errors
    /// `Generation` when the generator fails and `MalformedOutput` when a
    /// turn has neither a final answer nor an action.
    pub fn run(&self, question: &str) -> Result<AgentResult> {
        let run_id = Uuid::new_v4().to_string();
        let span = info_span!(
            "react_run",
            run_id = %run_id,
            max_iterations = self.config.max_iterations,
            tools = self.tools.len(),
        );
        let _guard = span.enter();

        info!(question = %question, "Starting agent run");

        let mut steps: Vec<AgentStep> = Vec::new();
        let mut transcript = self.build_prompt(question);

        for iteration in 0..self.config.max_iterations {
            let response = self
                .generator
                .generate(&transcript)
                .map_err(ReactError::generation)?;

            debug!("{}", self.llm_call_event(&run_id, iteration, &transcript, &response));

            let intent = parse(&response).map_err(|err| {
                warn!(iteration, error = %err, "Generator output could not be parsed");
                err
            })?;

            let (thought, action, action_input) = match intent {
                ParsedIntent::FinalAnswer { answer, .. } => {
                    info!("{}", RunCompletedEvent::new(&run_id, true, steps.len(), transcript.len()));
                    return Ok(AgentResult::finished(answer, steps));
                }
                ParsedIntent::ToolCall {
                    thought,
                    action,
                    action_input,
                } => (thought, action, action_input),
            };

            let observation = self.dispatch(&run_id, &action, &action_input)?;

            transcript.push('\n');
            transcript.push_str(&response);
            transcript.push('\n');
            transcript.push_str(OBSERVATION_MARKER);
            transcript.push(' ');
            transcript.push_str(&observation);
            transcript.push('\n');

            steps.push(AgentStep {
                thought,
                action,
                action_input,
                observation,
            });
        }

        warn!(
            max_iterations = self.config.max_iterations,
            "Agent stopped without a final answer"
        );
        info!("{}", RunCompletedEvent::new(&run_id, false, steps.len(), transcript.len()));
        Ok(AgentResult::max_iterations_reached(steps))
    }

    /// Event for one generation call, carrying the raw text when
    /// `log_llm_responses` is enabled
    fn llm_call_event(&self, run_id: &str, iteration: usize, prompt: &str, response: &str) -> LlmCallEvent {
        let event = LlmCallEvent::new(run_id, iteration, prompt, response);
        if self.config.log_llm_responses {
            event.with_response(response)
        } else {
            event
        }
    }

    /// Run a tool, turning tool failures into an `Error: ...` observation
    fn dispatch(&self, run_id: &str, action: &str, action_input: &str) -> Result<String> {
        let (observation, is_error) = match self.tools.execute(action, action_input) {
            Ok(output) => (output, false),
            Err(err) if err.is_tool_error() => {
                warn!(tool = %action, error = %err, "Tool failure reported to generator");
                (format!("Error: {err}"), true)
            }
            Err(err) => return Err(err),
        };
        info!("{}", ToolCallEvent::new(run_id, action, action_input, &observation, is_error));
        Ok(observation)
    }
}

impl fmt::Debug for ReActAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReActAgent")
            .field("tools", &self.tools)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

//! Generator seam and the records produced by an agent run.

mod model_client;
mod types;

pub use model_client::TextGenerator;
#[cfg(test)]
pub use model_client::MockTextGenerator;
pub use types::{AgentResult, AgentStep, MAX_ITERATIONS_ANSWER};

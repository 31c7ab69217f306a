//! Text generation client trait.

use crate::error::BoxError;

/// The text-completion function the agent queries once per turn.
///
/// Receives the whole transcript so far and returns the model's
/// continuation. It always returns text; an `Err` means the call itself
/// failed, and the agent lets that failure end the run.
///
/// Any `Fn(&str) -> String` closure is a generator:
///
/// ```rust
/// use react_agent::models::TextGenerator;
///
/// let generator = |_prompt: &str| "Thought: easy\nFinal Answer: 4".to_string();
/// assert!(generator.generate("What is 2 + 2?").unwrap().contains("Final Answer"));
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String, BoxError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String, BoxError> {
        Ok(self(prompt))
    }
}

//! Basic example running a ReAct loop with a scripted generator
//!
//! The generator here replays canned turns so the example runs offline.
//! Swap it for anything implementing `TextGenerator` to talk to a real model.

use react_agent::{logging, AgentConfig, ReActAgent, ToolRegistry};
use std::sync::atomic::{AtomicUsize, Ordering};

const SCRIPT: &[&str] = &[
    "Thought: I should look up the population first\nAction: population\nAction Input: Japan",
    "Thought: Now I can compute the share living in Tokyo\nAction: divide\nAction Input: 14 / 125",
    "Thought: I now know the answer\nFinal Answer: Roughly 11% of Japan's population lives in Tokyo.",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing("info", false);

    println!("🚀 react-agent - Basic Agent Example");

    let mut tools = ToolRegistry::new();
    tools.register("population", "Population of a country in millions", |country: &str| {
        match country {
            "Japan" => Ok("125".to_string()),
            other => Err(format!("no data for {other}")),
        }
    });
    tools.register("divide", "Divide two numbers written as 'a / b'", divide);

    println!("\n📋 Registered tools:\n{}", tools.describe());

    let turn = AtomicUsize::new(0);
    let generator = move |_transcript: &str| {
        let index = turn.fetch_add(1, Ordering::SeqCst).min(SCRIPT.len() - 1);
        SCRIPT[index].to_string()
    };

    let config = AgentConfig::default().with_max_iterations(5);
    let agent = ReActAgent::from_config(generator, tools, config)?;
    let result = agent.run("What share of Japan's population lives in Tokyo?")?;

    println!("\n🧠 Steps taken:");
    for (i, step) in result.steps.iter().enumerate() {
        println!("  {}. {} -> {}({}) = {}", i + 1, step.thought, step.action, step.action_input, step.observation);
    }
    println!("\n✅ Answer: {}", result.answer);
    println!("Success: {}", result.success);

    Ok(())
}

fn divide(input: &str) -> Result<String, String> {
    let (a, b) = input
        .split_once('/')
        .ok_or_else(|| format!("expected 'a / b', got '{input}'"))?;
    let a: f64 = a.trim().parse().map_err(|e| format!("bad numerator: {e}"))?;
    let b: f64 = b.trim().parse().map_err(|e| format!("bad denominator: {e}"))?;
    if b == 0.0 {
        return Err("division by zero".to_string());
    }
    Ok(format!("{:.3}", a / b))
}

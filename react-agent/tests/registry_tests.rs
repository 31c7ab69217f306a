//! Registry behavior seen through the public API

use react_agent::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Tool that counts how often it runs
struct Counter {
    calls: AtomicUsize,
}

impl Tool for Counter {
    fn name(&self) -> &str {
        "counter"
    }

    fn description(&self) -> &str {
        "Count invocations"
    }

    fn run(&self, _input: &str) -> std::result::Result<String, BoxError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(n.to_string())
    }
}

#[test]
fn test_custom_tool_registration() {
    let mut registry = ToolRegistry::new();
    registry.register_tool(Counter { calls: AtomicUsize::new(0) });

    assert_eq!(registry.execute("counter", "").unwrap(), "1");
    assert_eq!(registry.execute("counter", "").unwrap(), "2");
    assert_eq!(registry.describe(), "- counter: Count invocations");
}

#[test]
fn test_closure_replaces_custom_tool() {
    let mut registry = ToolRegistry::new();
    registry.register_tool(Counter { calls: AtomicUsize::new(0) });
    registry.register("counter", "Fixed value", |_: &str| "always 7");

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.execute("counter", "").unwrap(), "always 7");
    assert_eq!(registry.get("counter").unwrap().description(), "Fixed value");
}

#[test]
fn test_execute_error_names_missing_tool() {
    let mut registry = ToolRegistry::new();
    registry.register("search", "Search the web", |q: &str| q.to_string());

    match registry.execute("calculator", "1+1") {
        Err(ReactError::ToolNotFound { name }) => assert_eq!(name, "calculator"),
        other => panic!("expected ToolNotFound, got {other:?}"),
    }
}

#[test]
fn test_schemas_follow_registration_order() {
    let mut registry = ToolRegistry::new();
    registry.register("b", "second letter", |_: &str| "b");
    registry.register("a", "first letter", |_: &str| "a");

    let schemas: Vec<_> = registry.list().iter().map(|tool| tool.schema()).collect();
    assert_eq!(schemas[0].name, "b");
    assert_eq!(schemas[1].description, "first letter");
}

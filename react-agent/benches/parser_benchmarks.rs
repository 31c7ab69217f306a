//! Benchmarks for the hot paths of a run
//!
//! Parsing happens once per generator turn and the tool lookup once per
//! tool call, so these bound the per-iteration overhead of the loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use react_agent::*;

const TOOL_CALL: &str = "Thought: I need to search for this\nAction: search\nAction Input: rust ownership rules";
const FINAL_ANSWER: &str = "Thought: I now know the answer\nFinal Answer: Ownership ensures memory safety\nwithout a garbage collector.";

/// Benchmark parsing of a single turn
fn bench_parse_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("tool_call", |b| b.iter(|| black_box(parse(black_box(TOOL_CALL)))));

    group.bench_function("final_answer", |b| b.iter(|| black_box(parse(black_box(FINAL_ANSWER)))));

    group.bench_function("malformed", |b| {
        b.iter(|| black_box(parse(black_box("no markers in this output at all"))))
    });

    group.finish();
}

/// Benchmark parsing when the turn carries a long preamble
fn bench_parse_long_turn(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_long");

    for lines in [10usize, 100, 1000] {
        let text = format!("{}{}", "Some rambling reasoning line.\n".repeat(lines), TOOL_CALL);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &text, |b, text| {
            b.iter(|| black_box(parse(black_box(text))))
        });
    }

    group.finish();
}

/// Benchmark registry lookup and execution
fn bench_registry_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    for size in [1usize, 10, 50] {
        let mut registry = ToolRegistry::new();
        for i in 0..size {
            registry.register(format!("tool_{i}"), "Echo the input", |input: &str| input.to_string());
        }
        let last = format!("tool_{}", size - 1);

        group.bench_with_input(BenchmarkId::new("execute_last", size), &last, |b, name| {
            b.iter(|| black_box(registry.execute(black_box(name), black_box("payload"))))
        });
    }

    group.finish();
}

/// Benchmark a full two-turn run with a closure generator
fn bench_full_run(c: &mut Criterion) {
    let mut registry = ToolRegistry::new();
    registry.register("search", "Search the web", |_: &str| "result");
    let generator = |prompt: &str| {
        if prompt.contains("Observation: result\n") {
            FINAL_ANSWER.to_string()
        } else {
            TOOL_CALL.to_string()
        }
    };
    let agent = ReActAgent::new(generator, registry);

    c.bench_function("run_two_turns", |b| b.iter(|| black_box(agent.run(black_box("What is ownership?")))));
}

criterion_group!(
    benches,
    bench_parse_turn,
    bench_parse_long_turn,
    bench_registry_execute,
    bench_full_run
);
criterion_main!(benches);

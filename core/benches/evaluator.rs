//! Benchmarks for the sche pipeline.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. eval_only: evaluation of an already parsed tree
//! 2. full_pipeline: tokenize + parse + evaluate, fresh arena per call
//! 3. reused_arena: full pipeline in one arena that is reset between calls

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sche_core::{
    api::{Engine, EngineOptions},
    arena::Arena,
    evaluator, parser, tokenizer,
};

/// Generate a flat sum like "(+ 1 1 ... 1)" with `n` operands.
fn generate_flat_sum(n: usize) -> String {
    let mut expr = String::from("(+");
    for _ in 0..n {
        expr.push_str(" 1");
    }
    expr.push(')');
    expr
}

/// Generate "(+ 1 (+ 1 ... (+ 1 0)))" nested `n` levels deep.
fn generate_nested_sum(n: usize) -> String {
    "(+ 1 ".repeat(n) + "0" + &")".repeat(n)
}

fn bench_eval_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_only");

    // Sizes chosen to stay under the default nesting limit (1000)
    for size in [100, 200, 400, 800] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("nested", size), &size, |b, &size| {
            let arena = Arena::new();
            let source = generate_nested_sum(size);
            let tokens = tokenizer::tokenize(&arena, &source).expect("Tokenize failed");
            let tree = parser::parse(&arena, &tokens).expect("Parse failed");

            b.iter(|| evaluator::evaluate(black_box(&tree)).expect("Evaluation failed"));
        });

        group.bench_with_input(BenchmarkId::new("flat", size), &size, |b, &size| {
            let arena = Arena::new();
            let source = generate_flat_sum(size);
            let tokens = tokenizer::tokenize(&arena, &source).expect("Tokenize failed");
            let tree = parser::parse(&arena, &tokens).expect("Parse failed");

            b.iter(|| evaluator::evaluate(black_box(&tree)).expect("Evaluation failed"));
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let engine = Engine::new(EngineOptions::default());

    for size in [100, 200, 400, 800] {
        group.throughput(Throughput::Elements(size as u64));
        let source = generate_nested_sum(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| engine.eval(black_box(source)).expect("Evaluation failed"));
        });
    }

    group.finish();
}

fn bench_reused_arena(c: &mut Criterion) {
    let mut group = c.benchmark_group("reused_arena");
    let engine = Engine::new(EngineOptions::default());

    for size in [100, 200, 400, 800] {
        group.throughput(Throughput::Elements(size as u64));
        let source = generate_nested_sum(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            let mut arena = Arena::new();
            b.iter(|| {
                let value = engine
                    .eval_in(&arena, black_box(source))
                    .expect("Evaluation failed");
                arena.reset();
                value
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_eval_only,
    bench_full_pipeline,
    bench_reused_arena
);
criterion_main!(benches);

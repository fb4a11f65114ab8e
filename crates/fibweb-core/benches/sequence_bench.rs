//! Criterion benchmarks for sequence generation.
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/report/index.html`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fibweb_core::{fibonacci_sequence, Count, MAX_COUNT};

/// Generation cost across the accepted range.
fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci_sequence");

    for n in [1i64, 10, 50, MAX_COUNT] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci_sequence(black_box(n)))
        });
    }

    group.finish();
}

/// Full request path minus HTTP: parse, validate, generate, render.
fn parse_generate_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_generate_render");

    for raw in ["5", "93", "94", "abc"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), &raw, |b, &raw| {
            b.iter(|| match Count::parse(black_box(Some(raw))) {
                Ok(count) => format!("{}\n", count.sequence()),
                Err(e) => format!("ERROR: {}\n", e),
            })
        });
    }

    group.finish();
}

criterion_group!(benches, generate, parse_generate_render);
criterion_main!(benches);

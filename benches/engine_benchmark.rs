// ============================================================================
// Decimal Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - short, long-fraction and whitespace-heavy inputs
// 2. Arithmetic - range-checked add/subtract
// 3. Formatting - canonical text rendering
// 4. Calculator - full parse/compute/format round
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fincalc::prelude::*;
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let inputs = [
        ("short", "42"),
        ("six_digits", "1234567890.123456"),
        ("rounded", "0.99999995123"),
        ("spaced_comma", " 1 234 567 , 89 "),
        ("huge_integer", "123456789012345678901234567890.5"),
    ];

    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(parse(black_box(input))));
        });
    }

    group.finish();
}

fn benchmark_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    let a = ScaledAmount::from_micros(123_456_789_012_345_678i64);
    let b = ScaledAmount::from_micros(-987_654_321_098_765i64);

    for op in [Operation::Add, Operation::Subtract].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(op), op, |bench, &op| {
            bench.iter(|| black_box(compute(black_box(&a), black_box(&b), op)));
        });
    }

    group.finish();
}

fn benchmark_format(c: &mut Criterion) {
    let value = ScaledAmount::from_micros(-999_999_999_999_999_999i64);

    c.bench_function("format", |b| {
        b.iter(|| black_box(format(black_box(&value))));
    });
}

fn benchmark_calculator(c: &mut Criterion) {
    let calc = Calculator::with_defaults();

    c.bench_function("calculator_evaluate", |b| {
        b.iter(|| {
            black_box(calc.evaluate(
                black_box("1234567890,123456"),
                black_box("-987654321,654321"),
                Operation::Add,
            ))
        });
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_compute,
    benchmark_format,
    benchmark_calculator,
);
criterion_main!(benches);

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use text_casing::{case_insensitive_hash, Casing, SimpleWritingSystem, TextInfo};

fn english() -> TextInfo {
    TextInfo::new(Arc::new(SimpleWritingSystem::new(
        "en-US",
        "English (United States)",
        ",",
        false,
    )))
}

fn bench_char_casing(c: &mut Criterion) {
    let en = english();
    let input: Vec<char> = "The Quick Brown Fox Jumps Over The Lazy Dog".chars().collect();

    let mut g = c.benchmark_group("char casing");
    g.bench_function("char::to_lowercase", |b| {
        b.iter(|| {
            input
                .iter()
                .flat_map(|c| c.to_lowercase())
                .fold(0u32, |acc, c| acc.wrapping_add(c as u32))
        })
    });
    g.bench_function("TextInfo::to_lower", |b| {
        b.iter(|| {
            input
                .iter()
                .map(|&c| en.to_lower(c))
                .fold(0u32, |acc, c| acc.wrapping_add(c as u32))
        })
    });
    g.finish();
}

fn bench_hash(c: &mut Criterion) {
    let ascii = "The Quick Brown Fox Jumps Over The Lazy Dog".repeat(4);
    let mixed = format!("{ascii}é");

    let mut g = c.benchmark_group("case-insensitive hash");
    for (label, input) in [("ascii fast path", &ascii), ("non-ascii slow path", &mixed)] {
        g.bench_with_input(BenchmarkId::from_parameter(label), input, |b, input| {
            b.iter(|| case_insensitive_hash(input.as_str()))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_char_casing, bench_hash);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sort_basics_rs::{patterns, registry};

type PatternFn = fn(usize) -> Vec<i32>;

const PATTERNS: [(&str, PatternFn); 4] = [
    ("random", patterns::random),
    ("ascending", patterns::ascending),
    ("descending", patterns::descending),
    ("pipe_organ", patterns::pipe_organ),
];

// Kept modest, the quadratic sorts dominate the runtime.
const SIZES: [usize; 3] = [16, 128, 1024];

fn bench_sorts(c: &mut Criterion) {
    for (pattern_name, generate) in PATTERNS {
        for len in SIZES {
            let input = generate(len);
            let mut group = c.benchmark_group(format!("{pattern_name}-{len}"));

            for name in registry::names() {
                let sort_fn = registry::lookup(name).unwrap();
                group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, input| {
                    b.iter_batched_ref(
                        || input.clone(),
                        |v| sort_fn(v),
                        BatchSize::SmallInput,
                    )
                });
            }

            group.finish();
        }
    }
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);

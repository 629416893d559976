//! # H⊗ⁿ Benchmarks
//!
//! Naive tensor-power construction versus the closed form.
//!
//! Run: `cargo bench --bench hn_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsim_gates::{hn, hn_fast};

fn bench_hn(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_power");

    for n in [2usize, 4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, &n| {
            b.iter(|| black_box(hn(n)))
        });
        group.bench_with_input(BenchmarkId::new("closed_form", n), &n, |b, &n| {
            b.iter(|| black_box(hn_fast(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_hn);
criterion_main!(benches);

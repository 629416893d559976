//! # State Engine Benchmarks
//!
//! Gate placement on growing registers and full-register measurement.
//!
//! Run: `cargo bench --bench state_bench`

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use qsim_gates::{CNOT, HADAMARD, hn_fast};
use qsim_state::{apply_gate, create_state, get_projector_range, measure_all};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Benchmark single-qubit gate placement
fn bench_apply_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_gate");

    for n in [2usize, 4, 6, 8] {
        let state = create_state(&vec![0u8; n]).unwrap();
        group.bench_with_input(BenchmarkId::new("hadamard_middle", n), &state, |b, s| {
            b.iter(|| black_box(apply_gate(s, &HADAMARD, n / 2)))
        });
        group.bench_with_input(BenchmarkId::new("cnot_first", n), &state, |b, s| {
            b.iter(|| black_box(apply_gate(s, &CNOT, 0)))
        });
    }

    group.finish();
}

/// Benchmark projector construction
fn bench_projector(c: &mut Criterion) {
    let mut group = c.benchmark_group("projector_range");

    for n in [2usize, 4, 6] {
        group.bench_with_input(BenchmarkId::new("single_qubit", n), &n, |b, &n| {
            b.iter(|| black_box(get_projector_range(1, n / 2, n / 2, n)))
        });
    }

    group.finish();
}

/// Benchmark measurement of the uniform superposition
fn bench_measure_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_all");

    for n in [2usize, 4, 6] {
        let zero = create_state(&vec![0u8; n]).unwrap();
        let uniform = apply_gate(&zero, &hn_fast(n).unwrap(), 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        group.bench_with_input(BenchmarkId::new("uniform", n), &uniform, |b, s| {
            b.iter_batched(
                || s.clone(),
                |mut state| black_box(measure_all(&mut state, &mut rng)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apply_gate, bench_projector, bench_measure_all);
criterion_main!(benches);

//! # Matrix Benchmarks
//!
//! Dense product, tensor product and adjoint on square complex matrices.
//!
//! Run: `cargo bench --bench matrix_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qsim_matrix::{Complex64, Matrix, adjoint, multiply, tensor_product};

fn dense(size: usize) -> Matrix {
    Matrix::from_fn(size, size, |i, j| {
        Complex64::new((i + j) as f64 / size as f64, (i as f64 - j as f64) / size as f64)
    })
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [4usize, 16, 64] {
        let a = dense(size);
        let b = dense(size);
        group.bench_with_input(BenchmarkId::new("square", size), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(multiply(a, b)))
        });
    }

    group.finish();
}

fn bench_tensor(c: &mut Criterion) {
    let mut group = c.benchmark_group("tensor_product");

    for size in [2usize, 4, 8] {
        let a = dense(size);
        group.bench_with_input(BenchmarkId::new("self", size), &a, |b, a| {
            b.iter(|| black_box(tensor_product(a, a)))
        });
    }

    group.finish();
}

fn bench_adjoint(c: &mut Criterion) {
    let m = dense(64);
    c.bench_function("adjoint_64", |b| b.iter(|| black_box(adjoint(&m))));
}

criterion_group!(benches, bench_multiply, bench_tensor, bench_adjoint);
criterion_main!(benches);

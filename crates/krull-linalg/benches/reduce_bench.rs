//! Benchmarks for the Euclidean reduction kernels.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use krull_linalg::{left_kernel, reduced_form, DenseMatrix};
use krull_rings::Z;

/// Generates a deterministic integer matrix with mixed-magnitude entries.
fn sample_matrix(rows: usize, cols: usize) -> DenseMatrix<Z> {
    DenseMatrix::from_rows(
        (0..rows)
            .map(|i| {
                (0..cols)
                    .map(|j| Z::new(((i * 31 + j * 17) as i64 % 41) - 20))
                    .collect()
            })
            .collect(),
    )
}

fn bench_reduced_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduced_form");

    for size in [4, 8, 16, 32] {
        let m = sample_matrix(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(reduced_form(&m)));
        });
    }

    group.finish();
}

fn bench_left_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("left_kernel");

    for size in [4, 8, 16, 32] {
        // Twice as many rows as columns so the kernel is non-trivial.
        let m = sample_matrix(2 * size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(left_kernel(&m)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduced_form, bench_left_kernel);
criterion_main!(benches);

//! Benchmarks for shot sampling
//!
//! Run with: cargo bench -p qbasis-adapter-sim

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qbasis_adapter_sim::{exact_probabilities, run};
use qbasis_ir::{build_minus_state, build_plus_state, prepare_for_y_basis_measurement};

/// Benchmark sampling at increasing shot counts
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    let program = prepare_for_y_basis_measurement(build_plus_state());

    for shots in &[100_i64, 1_024, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("run", shots), shots, |b, &n| {
            b.iter(|| run(black_box(&program), black_box(n), Some(42)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the statevector replay alone
fn bench_exact(c: &mut Criterion) {
    let program = build_minus_state();
    c.bench_function("exact_probabilities", |b| {
        b.iter(|| exact_probabilities(black_box(&program)).unwrap());
    });
}

criterion_group!(benches, bench_sampling, bench_exact);
criterion_main!(benches);

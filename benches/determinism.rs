//! Benchmarks for round simulation and verification.
//!
//! Measures peg map generation, full simulation on the standard board,
//! scaling across board sizes, and end-to-end verification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use plinko_fair::{simulate, verify, DeterministicRng, PegMap, SimulationParams, VerifyRequest};

const COMBINED_SEED: &str = "e1dddf77de27d395ea2be2ed49aa2a59bd6bf12ee8d350c16c008abd406c07e0";

fn bench_peg_map(c: &mut Criterion) {
    c.bench_function("peg_map_12_rows", |b| {
        b.iter(|| {
            let mut rng = DeterministicRng::new(black_box(0xe1dd_df77));
            PegMap::generate(&mut rng, 12).hash()
        });
    });
}

fn bench_simulate(c: &mut Criterion) {
    let params = SimulationParams::new(6);
    c.bench_function("simulate_standard_board", |b| {
        b.iter(|| simulate(black_box(COMBINED_SEED), &params).unwrap());
    });
}

/// Peg map cost grows with rows^2.
fn bench_simulate_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_rows");
    for rows in [8u32, 12, 16, 32, 64] {
        group.throughput(Throughput::Elements(u64::from(rows * (rows + 1) / 2 + rows)));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            let params = SimulationParams::new(i64::from(rows / 2)).with_rows(rows);
            b.iter(|| simulate(black_box(COMBINED_SEED), &params).unwrap());
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let request = VerifyRequest {
        server_seed: "b2a5f3f32a4d9c6ee7a8c1d33456677890abcdeffedcba0987654321ffeeddcc".into(),
        client_seed: "candidate-hello".into(),
        nonce: "42".into(),
        drop_column: 6,
        rows: None,
    };
    c.bench_function("verify_round", |b| {
        b.iter(|| verify(black_box(&request)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_peg_map,
    bench_simulate,
    bench_simulate_scaling,
    bench_verify
);
criterion_main!(benches);

//! Benchmarks for field generation.
//!
//! Run with: `cargo bench --bench field_bench`
//!
//! Benchmarks island rasterization, derivative stencils, the full balance
//! and big-endian encoding.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use eddy_island::balance::{BalanceConfig, Coriolis, GeostrophicBalancer, Stencil};
use eddy_island::bathymetry::{BathymetryBuilder, Island};
use eddy_island::grid::{GridSpec, ScalarField, Staggering};
use eddy_island::io::encode_be_f32;
use eddy_island::ssh::{GaussianEddy, SshBuilder};
use ndarray::Axis;

const SIZES: [usize; 3] = [128, 256, 512];

/// Square grid of `n` cells covering 1024 km with one eddy.
fn setup_problem(n: usize) -> (GridSpec, ScalarField) {
    let grid = GridSpec::from_extent(1024e3, 1024e3, n, n);
    let eta = SshBuilder::new()
        .with_eddy(GaussianEddy::new(250e3, 512e3, 60e3, 0.25))
        .build(&grid);
    (grid, eta)
}

/// Benchmark island rasterization.
fn bench_bathymetry(c: &mut Criterion) {
    let mut group = c.benchmark_group("bathymetry");
    let builder = BathymetryBuilder::new(4000.0)
        .with_island(Island::hard_wall(600e3, 512e3, 60e3))
        .with_island(Island::sloped(300e3, 250e3, 50e3, 30e3));

    for n in SIZES {
        let (grid, _) = setup_problem(n);
        group.bench_with_input(BenchmarkId::new("build", format!("{n}x{n}")), &n, |b, _| {
            b.iter(|| builder.build(black_box(&grid)));
        });
    }

    group.finish();
}

/// Benchmark the three derivative stencils along y.
fn bench_stencils(c: &mut Criterion) {
    let mut group = c.benchmark_group("stencil");
    let (grid, eta) = setup_problem(256);

    for stencil in [
        Stencil::CenteredPeriodic,
        Stencil::BackwardPeriodic,
        Stencil::OneSidedEdges,
    ] {
        group.bench_function(stencil.name(), |b| {
            b.iter(|| stencil.derivative(black_box(&eta.data), Axis(0), grid.dy()));
        });
    }

    group.finish();
}

/// Benchmark the full geostrophic balance on both placements.
fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");
    let coriolis = Coriolis::beta_plane(5.0e-5, 2.0e-11, 0.0);

    for n in SIZES {
        let (grid, eta) = setup_problem(n);
        for (label, stencil, staggering) in [
            ("collocated", Stencil::CenteredPeriodic, Staggering::Collocated),
            ("c-grid", Stencil::BackwardPeriodic, Staggering::CGrid),
        ] {
            let config = BalanceConfig::new(coriolis, stencil, staggering);
            let balancer = GeostrophicBalancer::new(config);
            group.bench_with_input(BenchmarkId::new(label, format!("{n}x{n}")), &n, |b, _| {
                b.iter(|| balancer.balance(black_box(&grid), black_box(&eta)));
            });
        }
    }

    group.finish();
}

/// Benchmark big-endian encoding into memory.
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_be_f32");

    for n in SIZES {
        let (_, eta) = setup_problem(n);
        let data = eta.data.mapv(|v| v as f32);
        let mut buf = Vec::with_capacity(4 * n * n);
        group.bench_with_input(BenchmarkId::new("encode", format!("{n}x{n}")), &n, |b, _| {
            b.iter(|| {
                buf.clear();
                encode_be_f32(&mut buf, black_box(&data))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bathymetry,
    bench_stencils,
    bench_balance,
    bench_encode
);
criterion_main!(benches);

//! Circuit enumeration benchmarks: drivers and multi-arc policies across
//! size tiers.
#![allow(clippy::expect_used)]

use circuits_bench::generator::topology::complete_digraph;
use circuits_bench::{SizeTier, figure10, generate_graph};
use circuits_core::{EnumerationConfig, MultiArcPolicy, enumerate, enumerate_parallel};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const TIERS: [SizeTier; 4] = [
    SizeTier::Small,
    SizeTier::Medium,
    SizeTier::Large,
    SizeTier::XLarge,
];

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");

    for tier in TIERS {
        let graph = generate_graph(&tier.config(42));
        for policy in [MultiArcPolicy::Collapse, MultiArcPolicy::Multiplicity] {
            let config = EnumerationConfig::default().with_multi_arcs(policy);
            group.bench_function(BenchmarkId::new(policy.as_str(), tier.label()), |b| {
                b.iter(|| enumerate(&graph, &config).expect("succeeds"));
            });
        }
    }

    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_parallel");

    for tier in [SizeTier::Large, SizeTier::XLarge] {
        let graph = generate_graph(&tier.config(42));
        for threads in [1, 2, 4, 8] {
            let config = EnumerationConfig::default().with_threads(threads);
            group.bench_function(BenchmarkId::new(tier.label(), threads), |b| {
                b.iter(|| enumerate_parallel(&graph, &config).expect("succeeds"));
            });
        }
    }

    group.finish();
}

fn bench_fixed_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_shapes");

    let figure = figure10().expect("fixture builds");
    group.bench_function("figure10", |b| {
        b.iter(|| enumerate(&figure, &EnumerationConfig::default()).expect("succeeds"));
    });

    for n in [6, 7, 8] {
        let graph = complete_digraph(n);
        group.bench_function(BenchmarkId::new("complete", n), |b| {
            b.iter(|| enumerate(&graph, &EnumerationConfig::default()).expect("succeeds"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel, bench_fixed_shapes);
criterion_main!(benches);

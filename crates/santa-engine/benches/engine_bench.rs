//! Benchmarks for the assignment engine
//!
//! Measures draw time for:
//! - groups without exclusions
//! - groups of couples who may not draw each other
//! - tight groups where most attempts hit a dead end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use santa_engine::AssignmentEngine;
use santa_registry::{ParticipantRecord, Registry};

fn open_group(size: usize) -> Registry {
    Registry::from_records((0..size).map(|i| ParticipantRecord::new(format!("P{i}"), "x")))
        .expect("valid registry")
}

/// Partners exclude each other both ways.
fn couples(size: usize) -> Registry {
    Registry::from_records((0..size).map(|i| {
        ParticipantRecord::new(format!("P{i}"), "x").excluding([format!("P{}", i ^ 1)])
    }))
    .expect("valid registry")
}

/// Everyone may only give to the next two participants in the ring.
fn narrow_ring(size: usize) -> Registry {
    Registry::from_records((0..size).map(|i| {
        let allowed = [(i + 1) % size, (i + 2) % size];
        ParticipantRecord::new(format!("P{i}"), "x").excluding(
            (0..size)
                .filter(|j| *j != i && !allowed.contains(j))
                .map(|j| format!("P{j}")),
        )
    }))
    .expect("valid registry")
}

fn bench_open_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_group");

    for &size in &[4usize, 16, 64, 256] {
        let registry = open_group(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, r| {
            let mut engine = AssignmentEngine::seeded(42);
            b.iter(|| engine.assign(black_box(r)))
        });
    }
    group.finish();
}

fn bench_couples(c: &mut Criterion) {
    let mut group = c.benchmark_group("couples");

    for &size in &[4usize, 16, 64, 256] {
        let registry = couples(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, r| {
            let mut engine = AssignmentEngine::seeded(42);
            b.iter(|| engine.assign(black_box(r)))
        });
    }
    group.finish();
}

fn bench_narrow_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrow_ring");

    for &size in &[4usize, 6, 8] {
        let registry = narrow_ring(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &registry, |b, r| {
            let mut engine = AssignmentEngine::seeded(42);
            b.iter(|| engine.assign(black_box(r)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_open_group, bench_couples, bench_narrow_ring);
criterion_main!(benches);

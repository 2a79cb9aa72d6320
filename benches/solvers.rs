use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ssp_solve::{ca, ensure_substring_free, greedy, gha, tgreedy};
use std::hint::black_box;

/// Deterministic fragment set: overlapping windows of a fixed base string, long enough to give
/// each solver a non-trivial overlap graph while staying fast enough to bench repeatedly.
fn fragments(base: &str, window: usize, stride: usize) -> Vec<String> {
    let bytes = base.as_bytes();
    let mut raw = Vec::new();
    let mut pos = 0;
    while pos + window <= bytes.len() {
        raw.push(String::from_utf8(bytes[pos..pos + window].to_vec()).unwrap());
        pos += stride;
    }
    ensure_substring_free(&raw)
}

const BASE: &str = "the quick brown fox jumps over the lazy dog while the sly cat watches silently from the fence";

fn bench_overlap_graph_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap_graph");

    for &n in &[8usize, 16, 32] {
        let window = BASE.len() / 4;
        let stride = (BASE.len() - window) / n.max(1);
        let strings = fragments(BASE, window.max(4), stride.max(1));
        group.throughput(Throughput::Elements(strings.len() as u64));

        group.bench_with_input(BenchmarkId::new("greedy", n), &strings, |b, strings| {
            b.iter(|| black_box(greedy(strings).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("tgreedy", n), &strings, |b, strings| {
            b.iter(|| black_box(tgreedy(strings).unwrap()));
        });
    }

    group.finish();
}

fn bench_hierarchical_graph_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchical_graph");

    for &n in &[8usize, 16, 32] {
        let window = BASE.len() / 4;
        let stride = (BASE.len() - window) / n.max(1);
        let strings = fragments(BASE, window.max(4), stride.max(1));
        group.throughput(Throughput::Elements(strings.len() as u64));

        group.bench_with_input(BenchmarkId::new("gha", n), &strings, |b, strings| {
            b.iter(|| black_box(gha(strings).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("ca", n), &strings, |b, strings| {
            b.iter(|| black_box(ca(strings).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_overlap_graph_solvers, bench_hierarchical_graph_solvers);
criterion_main!(benches);

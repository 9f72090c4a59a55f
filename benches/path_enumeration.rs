//! Benchmarks for graph validation and path enumeration
//!
//! Uses stacked diamonds: each layer doubles the number of paths, so a graph
//! with `n` layers has `2^n` source-to-sink paths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dagpath::graph::DependencyGraph;
use dagpath::parser::Record;

/// Create `layers` diamonds chained end to end
fn create_diamond_chain(layers: usize) -> Vec<Record> {
    let mut records = vec![Record::root("n0")];

    for layer in 0..layers {
        let top = format!("n{}", layer);
        let bottom = format!("n{}", layer + 1);
        let left = format!("l{}", layer);
        let right = format!("r{}", layer);

        records.push(Record::new(left.clone(), [top.clone()]));
        records.push(Record::new(right.clone(), [top]));
        records.push(Record::new(bottom, [left, right]));
    }

    records
}

/// Create a long single chain
fn create_chain(length: usize) -> Vec<Record> {
    let mut records = vec![Record::root("c0")];
    for i in 1..length {
        records.push(Record::new(format!("c{}", i), [format!("c{}", i - 1)]));
    }
    records
}

/// Benchmark graph construction plus Kahn validation
fn bench_build_and_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_and_validate");

    for size in [100, 1000, 10000].iter() {
        let records = create_chain(*size);

        group.bench_with_input(BenchmarkId::new("chain", size), &records, |b, records| {
            b.iter(|| {
                let graph = DependencyGraph::from_records(records);
                black_box(graph.validate().is_ok())
            });
        });
    }

    group.finish();
}

/// Benchmark exhaustive enumeration on stacked diamonds
fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_paths");

    for layers in [4, 8, 12].iter() {
        let graph = DependencyGraph::from_records(&create_diamond_chain(*layers));
        let dag = graph.validate().unwrap();

        group.bench_with_input(BenchmarkId::new("diamonds", layers), &dag, |b, dag| {
            b.iter(|| black_box(dag.enumerate_paths()));
        });
    }

    group.finish();
}

/// Benchmark path counting without materialising paths
fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_paths");

    for layers in [12, 32, 60].iter() {
        let graph = DependencyGraph::from_records(&create_diamond_chain(*layers));
        let dag = graph.validate().unwrap();

        group.bench_with_input(BenchmarkId::new("diamonds", layers), &dag, |b, dag| {
            b.iter(|| black_box(dag.count_paths()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_and_validate, bench_enumerate, bench_count);
criterion_main!(benches);

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use mutaradif::prelude::*;
use mutaradif::synonym::{AdjacencyGraph, enumerate_cycles};

/// Generate a ring-shaped adjacency graph with a few chords per word.
fn generate_adjacency(word_count: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new();
    for i in 0..word_count {
        let neighbors: Vec<String> = [1, 3, 7]
            .iter()
            .flat_map(|step| {
                [
                    format!("word_{}", (i + step) % word_count),
                    format!("word_{}", (i + word_count - step) % word_count),
                ]
            })
            .collect();
        graph.insert(format!("word_{i}"), neighbors);
    }
    graph
}

/// Generate synsets of consecutive words.
fn generate_synsets(count: usize, word_count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            (0..3)
                .map(|j| format!("word_{}", (i * 5 + j) % word_count))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect()
}

fn build_expander(word_count: usize) -> SynonymExpander {
    let adjacency = generate_adjacency(word_count);
    let graphs = LeveledGraphs::new(
        RelationGraph::derive(&adjacency, 3),
        RelationGraph::derive(&adjacency, 4),
    );
    SynonymExpander::new(Arc::new(graphs), ExpanderConfig::default())
}

/// Benchmark cycle enumeration.
fn bench_cycle_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_enumeration");
    let adjacency = generate_adjacency(500);

    for max_len in [3, 4, 5] {
        group.bench_function(format!("enumerate_max_len_{max_len}"), |b| {
            b.iter(|| {
                let count = enumerate_cycles(&adjacency, black_box("word_0"), max_len).count();
                black_box(count)
            })
        });
    }

    group.sample_size(10);
    group.bench_function("derive_chain_table_500", |b| {
        b.iter(|| {
            let graph = RelationGraph::derive(black_box(&adjacency), 4);
            black_box(graph)
        })
    });

    group.finish();
}

/// Benchmark synset expansion and evaluation.
fn bench_synset_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("synset_scoring");
    let expander = build_expander(500);

    for level in [2, 3] {
        group.bench_function(format!("extend_level_{level}"), |b| {
            b.iter(|| {
                let scores = expander.extend(black_box("word_0|word_1|word_2"), level);
                black_box(scores)
            })
        });

        group.bench_function(format!("evaluate_level_{level}"), |b| {
            b.iter(|| {
                let scores = expander.evaluate(black_box("word_0|word_1|word_2"), level);
                black_box(scores)
            })
        });
    }

    group.finish();
}

/// Benchmark parallel batch processing against a sequential loop.
fn bench_batch_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_operations");
    group.sample_size(20);

    let expander = build_expander(500);
    let synsets = generate_synsets(200, 500);

    group.throughput(Throughput::Elements(synsets.len() as u64));
    group.bench_function("parallel_extend_batch", |b| {
        b.iter(|| black_box(expander.extend_batch(&synsets, 2)))
    });

    group.bench_function("sequential_extend", |b| {
        b.iter(|| {
            let results: Vec<_> = synsets
                .iter()
                .map(|synset| expander.extend(synset, 2))
                .collect();
            black_box(results)
        })
    });

    group.bench_function("parallel_evaluate_batch", |b| {
        b.iter(|| black_box(expander.evaluate_batch(&synsets, 2)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cycle_enumeration,
    bench_synset_scoring,
    bench_batch_operations
);

criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use std::fmt::Write as _;
use std::hint::black_box;
use word_freq_core::Aggregator;
use word_freq_engine::config::ConfigBuilder;

fn synthetic_document(lines: usize) -> String {
    let mut doc = String::new();
    for i in 0..lines {
        writeln!(doc, "alpha beta gamma alpha delta-{i} beta alpha").unwrap();
    }
    doc
}

fn benchmark_aggregate(c: &mut Criterion) {
    let doc = synthetic_document(1_000);
    c.bench_function("aggregate_1k_lines", |b| {
        b.iter(|| {
            let aggregator = Aggregator::from_lines(black_box(doc.lines()));
            black_box(aggregator.peak().highest_count);
        })
    });
}

fn benchmark_engine_run(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.txt");
    std::fs::write(&path, synthetic_document(1_000)).unwrap();
    let config = ConfigBuilder::default()
        .inputs(vec![path])
        .build()
        .unwrap();

    c.bench_function("run_1k_line_file", |b| {
        b.iter(|| {
            let result = word_freq_engine::run(black_box(&config)).unwrap();
            black_box(result.reports.len());
        })
    });
}

criterion_group!(benches, benchmark_aggregate, benchmark_engine_run);
criterion_main!(benches);

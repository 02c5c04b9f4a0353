//! Profiling performance benchmarks.
//!
//! Measures the core analyses over generated in-memory tables, which is the
//! shape the library sees in practice: the caller loads once and profiles.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use synopsis::{DataTable, Profiler, correlation_matrix, summarize_dataset};

/// Generate a mixed-kind table with some missing cells.
fn generate_table(rows: usize) -> DataTable {
    let headers = vec![
        "id".to_string(),
        "score".to_string(),
        "ratio".to_string(),
        "group".to_string(),
        "active".to_string(),
        "joined".to_string(),
    ];

    let groups = ["control", "low", "mid", "high"];
    let mut data = Vec::with_capacity(rows);

    for row in 0..rows {
        let score = if row % 20 == 0 {
            String::new()
        } else {
            format!("{}", (row * 7) % 500)
        };
        data.push(vec![
            format!("{}", row),
            score,
            format!("{:.3}", (row % 100) as f64 / 100.0),
            groups[row % groups.len()].to_string(),
            if row % 2 == 0 { "true" } else { "false" }.to_string(),
            format!("2023-{:02}-{:02}", (row % 12) + 1, (row % 28) + 1),
        ]);
    }

    DataTable::new(headers, data, b',')
}

/// Benchmark the per-column summarizer alone.
fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");

    for rows in [100, 1000, 5000].iter() {
        let table = generate_table(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| summarize_dataset(black_box(table)));
        });
    }

    group.finish();
}

/// Benchmark the numeric correlation matrix alone.
fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    for rows in [100, 1000, 5000].iter() {
        let table = generate_table(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| correlation_matrix(black_box(table)));
        });
    }

    group.finish();
}

/// Benchmark the full report over an in-memory table.
fn bench_full_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_profile");
    let profiler = Profiler::new();

    for rows in [100, 1000, 5000].iter() {
        let table = generate_table(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &table, |b, table| {
            b.iter(|| profiler.profile_table(black_box(table)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_summarize, bench_correlation, bench_full_profile);
criterion_main!(benches);

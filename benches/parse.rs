//! Benchmarks for Gmail WEEE header extraction

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gmail_weee::parser::extract_addresses;

fn header_extraction_benchmark(c: &mut Criterion) {
    let many_recipients = (0..20)
        .map(|i| format!("\"User {i}\" <user{i}@example.com>"))
        .collect::<Vec<_>>()
        .join(", ");
    let headers: Vec<(&str, &str)> = vec![
        ("bare", "alice@example.com"),
        ("named", "\"Alice Example\" <alice@example.com>"),
        ("encoded", "=?UTF-8?B?Sm9zw6k=?= <jose@example.com>"),
        ("many", &many_recipients),
    ];

    let mut group = c.benchmark_group("header_extraction");

    for (id, header) in &headers {
        group.bench_with_input(BenchmarkId::new("extract", id), header, |b, header| {
            b.iter(|| extract_addresses(header, "me@example.com"));
        });
    }

    group.finish();
}

criterion_group!(benches, header_extraction_benchmark);
criterion_main!(benches);

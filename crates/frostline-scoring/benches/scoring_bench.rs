use criterion::{black_box, criterion_group, criterion_main, Criterion};

use frostline_core::models::Severity;
use frostline_scoring::ConfidenceEngine;
use test_fixtures::{at, make_record};

fn bench_score_single(c: &mut Criterion) {
    let engine = ConfidenceEngine::default();
    let record = make_record("CompressorTrip", Severity::Critical, 3, at(12, 30));
    c.bench_function("score_single_record", |b| {
        b.iter(|| engine.score(black_box(&record), black_box(Some(4))))
    });
}

fn bench_score_batch(c: &mut Criterion) {
    let engine = ConfidenceEngine::default();
    let records: Vec<_> = (0..1_000u32)
        .map(|i| {
            let severity = Severity::ALL[(i % 4) as usize];
            make_record(&format!("T{}", i % 37), severity, i % 9 + 1, at(i % 24, i % 60))
        })
        .collect();
    c.bench_function("score_1k_records", |b| {
        b.iter(|| {
            records
                .iter()
                .map(|r| engine.score(r, Some(3)).confidence)
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_score_single, bench_score_batch);
criterion_main!(benches);

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use keypad_core::dict::{Dictionary, DEFAULT_DICTIONARY};
use keypad_core::predictive::PredictiveEngine;

fn bench_add_digit(c: &mut Criterion) {
    let dict: Arc<dyn Dictionary> = Arc::new(DEFAULT_DICTIONARY);
    let mut group = c.benchmark_group("add_digit");
    // Early, middle and late positions in the sorted table, plus a miss.
    for seq in ["2", "4663", "843", "9355", "99999"] {
        group.bench_with_input(BenchmarkId::from_parameter(seq), seq, |b, seq| {
            let mut engine = PredictiveEngine::new(Arc::clone(&dict));
            b.iter(|| {
                engine.reset();
                for d in seq.chars() {
                    engine.add_digit(d);
                }
                engine.candidate_count()
            });
        });
    }
    group.finish();
}

fn bench_backspace(c: &mut Criterion) {
    let dict: Arc<dyn Dictionary> = Arc::new(DEFAULT_DICTIONARY);
    c.bench_function("backspace_rematch", |b| {
        let mut engine = PredictiveEngine::new(dict.clone());
        b.iter(|| {
            engine.reset();
            for d in "43556".chars() {
                engine.add_digit(d);
            }
            while !engine.key_sequence().is_empty() {
                engine.backspace();
            }
        });
    });
}

criterion_group!(benches, bench_add_digit, bench_backspace);
criterion_main!(benches);

//! Criterion benchmarks for Sentira EM training.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sentira::em::{EmConfig, EmTrainer, SeedMode};
use sentira::model::ModelKind;
use std::hint::black_box;

/// Generate synthetic training lines with a small sentiment-flavored
/// vocabulary. A sprinkling of lines carries a marker so the
/// semisupervised path is exercised too.
fn generate_training_lines(count: usize) -> Vec<String> {
    let positive = ["great", "wonderful", "fun", "moving", "sharp", "charming"];
    let negative = ["terrible", "dull", "boring", "messy", "flat", "tedious"];
    let neutral = ["movie", "film", "story", "cast", "script", "scene", "plot"];

    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let length = 4 + (i % 6);
        let mut words = Vec::with_capacity(length + 1);
        let flavored = if i % 2 == 0 { &positive } else { &negative };
        if i % 10 == 0 {
            words.push(if i % 2 == 0 { ":)" } else { ":(" }.to_string());
        }
        for j in 0..length {
            let word = if j % 2 == 0 {
                flavored[(i + j) % flavored.len()]
            } else {
                neutral[(i * 3 + j) % neutral.len()]
            };
            words.push(word.to_string());
        }
        lines.push(words.join(" "));
    }
    lines
}

fn trainer_for(model: ModelKind, iterations: usize) -> EmTrainer {
    EmTrainer::new(EmConfig {
        iterations,
        model,
        seed: SeedMode::Fixed(2019),
        ..EmConfig::default()
    })
    .unwrap()
}

fn bench_training(c: &mut Criterion) {
    let lines = generate_training_lines(500);

    let mut group = c.benchmark_group("training");
    group.throughput(Throughput::Elements(lines.len() as u64));

    let trainer = trainer_for(ModelKind::NaiveBayes, 5);
    group.bench_function("naive_bayes_5_rounds", |b| {
        b.iter(|| trainer.train(black_box(lines.clone())).unwrap())
    });

    let trainer = trainer_for(ModelKind::Markov, 5);
    group.bench_function("markov_5_rounds", |b| {
        b.iter(|| trainer.train(black_box(lines.clone())).unwrap())
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let lines = generate_training_lines(500);
    let probes = generate_training_lines(100);

    let mut group = c.benchmark_group("classification");
    group.throughput(Throughput::Elements(probes.len() as u64));

    for (name, model) in [
        ("naive_bayes", ModelKind::NaiveBayes),
        ("markov", ModelKind::Markov),
    ] {
        let trained = trainer_for(model, 3).train(lines.clone()).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                for probe in &probes {
                    black_box(trained.classify(black_box(probe)).unwrap());
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_training, bench_classification);
criterion_main!(benches);

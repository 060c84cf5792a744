//! Benchmarks for chain building
//!
//! Run with: cargo bench --bench admission_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use wordchain_core::{edit_distance_is_one, ChainSet, ChainSetConfig};

/// Deterministic pseudo-random words over a small alphabet so that many
/// pairs are one edit apart
fn generate_words(count: usize) -> Vec<String> {
    let alphabet = b"abcde";
    let mut state: u32 = 0x2545_f491;
    let mut words = Vec::with_capacity(count);

    for _ in 0..count {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let len = 2 + (state % 4) as usize;
        let word = (0..len)
            .map(|i| alphabet[((state >> (i * 3)) % 5) as usize] as char)
            .collect();
        words.push(word);
    }
    words
}

fn bench_edit_distance(c: &mut Criterion) {
    let pairs = [
        ("farm", "form"),
        ("cat", "cats"),
        ("kitten", "sitting"),
        ("abcdefghij", "abcdefghij"),
    ];

    c.bench_function("edit_distance_is_one", |b| {
        b.iter(|| {
            for (a, w) in &pairs {
                black_box(edit_distance_is_one(black_box(a), black_box(w)));
            }
        });
    });
}

fn bench_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("admission");

    for count in [100, 1_000, 5_000] {
        let words = generate_words(count);
        group.throughput(Throughput::Elements(count as u64));

        for allow_duplicates in [true, false] {
            let id = if allow_duplicates { "duplicates" } else { "unique" };
            group.bench_with_input(BenchmarkId::new(id, count), &words, |b, words| {
                // Room for every word at either end
                let config = ChainSetConfig::builder()
                    .allow_duplicates(allow_duplicates)
                    .chain_capacity(count)
                    .build()
                    .unwrap();
                b.iter(|| {
                    let mut set = ChainSet::with_config(config.clone()).unwrap();
                    set.admit_all(words.iter().map(String::as_str)).unwrap();
                    black_box(set.len())
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance, bench_admission);
criterion_main!(benches);

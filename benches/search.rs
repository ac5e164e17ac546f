//! Benchmarks for kmp-dfa search
//!
//! Compares the automaton against a brute-force scan on inputs that are easy
//! (random text) and hard (long runs of a repeated prefix) for brute force.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kmp_dfa::Kmp;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Brute-force scan that backs up after every mismatch.
fn naive_find(pattern: &[u8], text: &[u8]) -> Option<usize> {
    text.windows(pattern.len()).position(|w| w == pattern)
}

/// Seeded random lowercase text, identical across runs.
fn random_text(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0x9e37_79b9_7f4a_7c15);
    (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect()
}

fn bench_build(c: &mut Criterion) {
    let pattern = b"ABABACABABACABABACABAB";

    c.bench_function("build_dfa", |b| {
        b.iter(|| Kmp::new(black_box(pattern)).unwrap())
    });
}

fn bench_random_text(c: &mut Criterion) {
    let mut text = random_text(64 * 1024);
    let pattern = b"needleinahaystack";
    text.extend_from_slice(pattern);
    let kmp = Kmp::new(pattern).unwrap();

    let mut group = c.benchmark_group("random_text");
    group.bench_function("kmp", |b| b.iter(|| kmp.find(black_box(&text))));
    group.bench_function("naive", |b| {
        b.iter(|| naive_find(black_box(pattern), black_box(&text)))
    });
    group.finish();
}

fn bench_repetitive_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("repetitive_text");

    // Pattern a^(n-1)b against a^N: brute force is O(N*n), the automaton O(N)
    for n in [8usize, 64, 512] {
        let mut pattern = vec![b'a'; n - 1];
        pattern.push(b'b');
        let text = vec![b'a'; 64 * 1024];
        let kmp = Kmp::new(pattern.as_slice()).unwrap();

        group.bench_with_input(BenchmarkId::new("kmp", n), &text, |b, text| {
            b.iter(|| kmp.find(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("naive", n), &text, |b, text| {
            b.iter(|| naive_find(black_box(&pattern), black_box(text)))
        });
    }

    group.finish();
}

fn bench_unknown_symbols(c: &mut Criterion) {
    // Text made only of symbols absent from the pattern
    let text = vec![b'z'; 64 * 1024];
    let kmp = Kmp::new(b"abcabd").unwrap();

    c.bench_function("unknown_symbols", |b| b.iter(|| kmp.find(black_box(&text))));
}

fn bench_char_symbols(c: &mut Criterion) {
    let text: String = "日本語のテキスト".repeat(2048) + "検索";
    let kmp = Kmp::from_symbols("検索".chars()).unwrap();

    c.bench_function("char_symbols", |b| {
        b.iter(|| kmp.find_str(black_box(&text)))
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_random_text,
    bench_repetitive_text,
    bench_unknown_symbols,
    bench_char_symbols,
);
criterion_main!(benches);

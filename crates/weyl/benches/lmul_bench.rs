//! Criterion benchmarks for the normal form engine.
//! Focus: random words of length {16, 64, 256} in F4 and E8, Bruhat
//! comparisons and reduced-expression enumeration of longest elements.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use weyl::WeylGroup;

fn random_word(rank: usize, len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(1..=rank) as u8).collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("lmul");
    for label in ["F4", "E8"] {
        let w = WeylGroup::from_label(label).unwrap();
        for &len in &[16usize, 64, 256] {
            group.bench_with_input(
                BenchmarkId::new(format!("normalize_{label}"), len),
                &len,
                |b, &len| {
                    b.iter_batched(
                        || random_word(w.rank(), len, 41),
                        |word| {
                            let _x = w.element(&word, true).unwrap();
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

fn bench_bruhat(c: &mut Criterion) {
    let w = WeylGroup::from_label("E6").unwrap();
    let w0 = w.longest_element().unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let xs: Vec<_> = (0..32).map(|_| w.random_element(&mut rng, 24)).collect();
    c.bench_function("bruhat_lt_e6_vs_w0", |b| {
        b.iter(|| xs.iter().filter(|x| x.bruhat_lt(&w0).unwrap()).count())
    });
}

fn bench_reduced(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduced_expressions");
    for label in ["A4", "B3", "D4"] {
        let w = WeylGroup::from_label(label).unwrap();
        let w0 = w.longest_element().unwrap();
        group.bench_function(BenchmarkId::new("all", label), |b| {
            b.iter(|| w0.reduced_expressions(false).count())
        });
        group.bench_function(BenchmarkId::new("up_to_commutation", label), |b| {
            b.iter(|| w0.reduced_expressions(true).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize, bench_bruhat, bench_reduced);
criterion_main!(benches);

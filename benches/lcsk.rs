use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lcskpp::{lcsk_sparse_fast, LcskParams, Mode};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

// A copy of `a` with about one substitution per ten positions.
fn mutate(rng: &mut StdRng, a: &[u8]) -> Vec<u8> {
    a.iter()
        .map(|&c| if rng.gen_bool(0.1) { b"ACGT"[rng.gen_range(0..4)] } else { c })
        .collect()
}

fn bench_lcskpp(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcskpp_similar");
    for &len in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let a = random_dna(&mut rng, len);
        let b = mutate(&mut rng, &a);

        for k in [4usize, 10] {
            let params = LcskParams::new(k);
            group.bench_with_input(BenchmarkId::new(format!("k{k}"), len), &len, |bench, _| {
                bench.iter(|| black_box(lcsk_sparse_fast(&a, &b, &params)))
            });
        }
    }
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_dna(&mut rng, 2_000);
    let b = mutate(&mut rng, &a);

    let mut group = c.benchmark_group("lcskpp_modes");
    for (name, mode, lcsk_plus) in [
        ("lcsk", Mode::SingleStart, false),
        ("lcskpp", Mode::SingleStart, true),
        ("multistart", Mode::MultistartLogarithmic, true),
    ] {
        let mut params = LcskParams::new(8);
        params.mode = mode;
        params.lcsk_plus = lcsk_plus;
        group.bench_function(name, |bench| {
            bench.iter(|| black_box(lcsk_sparse_fast(&a, &b, &params)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lcskpp, bench_modes);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{prelude::*, SeedableRng};

fn random_text(rng: &mut SmallRng, len: usize, alphabet_size: u8) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..alphabet_size)).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(123);

    let mut group = c.benchmark_group("sais");
    for i in 1..=6 {
        let len = 10usize.pow(i as u32);

        // a small alphabet forces deeper recursion than raw bytes do
        for &alphabet_size in &[4u8, u8::MAX] {
            let s = random_text(&mut rng, len, alphabet_size);
            let mut sa = vec![0u32; s.len()];
            group.bench_with_input(
                BenchmarkId::new(format!("alphabet {}", alphabet_size), len),
                &s,
                |b, s| b.iter(|| sais::construct(&s[..], alphabet_size as usize, &mut sa)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

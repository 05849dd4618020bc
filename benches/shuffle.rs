use clt::{AesPrf128Ctr, Key, Permutation};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");

    for degree in [16u32, 256, 4096] {
        let mut rng = AesPrf128Ctr::from_key(&Key::new([7; 16]));
        let mut p = Permutation::new(degree);

        group.bench_with_input(BenchmarkId::new("fisher-yates", degree), &degree, |b, _| {
            b.iter(|| p.shuffle(black_box(&mut rng)))
        });
        group.bench_with_input(BenchmarkId::new("recursive split", degree), &degree, |b, _| {
            b.iter(|| p.shuffle_rs(black_box(&mut rng)))
        });
    }

    group.finish();
}

pub fn bench_rank(c: &mut Criterion) {
    let mut rng = AesPrf128Ctr::from_key(&Key::new([7; 16]));
    let mut p = Permutation::new(1024);
    let _ = p.shuffle(&mut rng);
    let r = p.rank();

    c.bench_function("rank degree 1024", |b| b.iter(|| black_box(&p).rank()));
    c.bench_function("unrank degree 1024", |b| {
        b.iter(|| Permutation::unrank(black_box(&r), 1024))
    });
}

criterion_group!(benches, bench_shuffle, bench_rank);
criterion_main!(benches);

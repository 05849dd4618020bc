use clt::{Aes128, AesPrf128, Backend, CounterStream, Key, Mmo128};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_aes128(c: &mut Criterion) {
    let key = Key::new([0x2b; 16]);
    let mut group = c.benchmark_group("aes128");

    for backend in [Backend::Soft, Backend::AesNi] {
        if !backend.is_available() {
            continue;
        }

        let cipher = Aes128::with_backend(&key, backend);
        let mut blocks = vec![[0u8; 16]; 1024];

        group.throughput(Throughput::Bytes(16));
        group.bench_function(BenchmarkId::new("encrypt 1 block", format!("{backend:?}")), |b| {
            let mut block = [0u8; 16];
            b.iter(|| cipher.encrypt_block(black_box(&mut block)))
        });

        group.throughput(Throughput::Bytes(16 * 1024));
        group.bench_function(BenchmarkId::new("encrypt 1024 blocks", format!("{backend:?}")), |b| {
            b.iter(|| cipher.encrypt_blocks(black_box(&mut blocks)))
        });
        group.bench_function(BenchmarkId::new("decrypt 1024 blocks", format!("{backend:?}")), |b| {
            b.iter(|| cipher.decrypt_blocks(black_box(&mut blocks)))
        });
        group.bench_function(BenchmarkId::new("ctr 1024 blocks", format!("{backend:?}")), |b| {
            b.iter(|| cipher.ctr_stream(black_box(&mut blocks), 0))
        });

        let mmo = Mmo128::with_backend(&key, backend);
        group.bench_function(BenchmarkId::new("mmo 1024 blocks", format!("{backend:?}")), |b| {
            b.iter(|| mmo.hash_blocks(black_box(&mut blocks)))
        });

        let prf = AesPrf128::with_backend(&key, backend);
        group.bench_function(BenchmarkId::new("prf 1024 blocks", format!("{backend:?}")), |b| {
            b.iter(|| prf.apply_blocks(black_box(&mut blocks)))
        });
    }

    group.finish();
}

pub fn bench_key_schedule(c: &mut Criterion) {
    let key = Key::new([0x2b; 16]);

    c.bench_function("aes128 key schedule", |b| {
        b.iter(|| Aes128::with_backend(black_box(&key), Backend::Soft))
    });
}

criterion_group!(benches, bench_aes128, bench_key_schedule);
criterion_main!(benches);

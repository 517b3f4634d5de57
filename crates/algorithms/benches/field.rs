//! Benchmarks for prime and binary field arithmetic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecarith_algorithms::ec::Curve;
use ecarith_params::{SECP256K1, SECP256R1, SECP384R1, SECT163K1, SECT283K1};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_field_arithmetic(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(0xf1e1d);

    for params in [&SECP256K1, &SECP256R1, &SECP384R1, &SECT163K1, &SECT283K1] {
        let curve = Curve::from_params(params).expect("named curve");
        let mut group = c.benchmark_group(format!("{}_field", params.name));

        let a = curve.random_field_element_mult(&mut rng);
        let b = curve.random_field_element_mult(&mut rng);

        group.bench_function("add", |bench| {
            bench.iter(|| black_box(&a).add(black_box(&b)))
        });

        group.bench_function("mul", |bench| {
            bench.iter(|| black_box(&a).multiply(black_box(&b)))
        });

        group.bench_function("square", |bench| {
            bench.iter(|| black_box(&a).square())
        });

        group.bench_function("invert", |bench| {
            bench.iter(|| black_box(&a).invert())
        });

        group.bench_function("sqrt", |bench| {
            let sq = a.square();
            bench.iter(|| black_box(&sq).sqrt())
        });

        group.finish();
    }
}

fn bench_square_pow(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let curve = Curve::from_params(&SECT283K1).expect("named curve");
    let a = curve.random_field_element_mult(&mut rng);

    let mut group = c.benchmark_group("sect283k1_square_pow");
    for n in [1usize, 8, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, &n| {
            bench.iter(|| black_box(&a).square_pow(n))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_field_arithmetic, bench_square_pow);
criterion_main!(benches);

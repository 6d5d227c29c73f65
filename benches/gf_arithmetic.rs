//! Benchmarks for finite field arithmetic.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gfcalc::gf::multiply::{karatsuba_multiply, multiply_naive};
use gfcalc::gf::{FieldExtension, MulStrategy, SimpleField};

/// Deterministic pseudo-random coefficients in [0, p).
fn coefficients(len: usize, p: u64, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            (state >> 33) % p
        })
        .collect()
}

fn bench_poly_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial Multiplication");
    let p = 65_537;

    for len in [8usize, 32, 128, 512] {
        let a = coefficients(len, p, 1);
        let b = coefficients(len, p, 2);

        group.bench_with_input(BenchmarkId::new("schoolbook", len), &len, |bench, _| {
            bench.iter(|| multiply_naive(&a, &b, p));
        });
        group.bench_with_input(BenchmarkId::new("karatsuba", len), &len, |bench, _| {
            bench.iter(|| karatsuba_multiply(&a, &b, p));
        });
    }

    group.finish();
}

fn bench_simple_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(p) Multiplication");

    for p in [7u64, 65_537, (1 << 61) - 1] {
        let gf = SimpleField::new(p).unwrap();

        group.bench_with_input(BenchmarkId::new("p", p), &gf, |b, gf| {
            let a = gf.element(3);
            let b_elem = gf.element(5);
            b.iter(|| {
                let mut result = a;
                for _ in 0..100 {
                    result = result * b_elem;
                }
                result
            });
        });
    }

    group.finish();
}

fn bench_extension_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(p^n) Inverse");

    let fields = [
        ("2^8", FieldExtension::new(2, &[1, 0, 0, 0, 1, 1, 0, 1, 1]).unwrap()),
        ("7^3", FieldExtension::new(7, &[1, 0, 0, 5]).unwrap()),
        ("101^2", FieldExtension::new(101, &[1, 0, -2]).unwrap()),
    ];

    for (name, field) in fields {
        for strategy in [MulStrategy::Schoolbook, MulStrategy::Karatsuba] {
            let field = field.clone().with_strategy(strategy);
            let a = field.element(&[1, 1, 1]);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), name),
                &a,
                |b, a| b.iter(|| a.inverse().unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_field_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("GF(p^n) Creation");

    // Ben-Or dominates construction cost
    let moduli: [(&str, u64, &[i64]); 3] = [
        ("2^8", 2, &[1, 0, 0, 0, 1, 1, 0, 1, 1]),
        ("2^16", 2, &[1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 1]),
        ("7^3", 7, &[1, 0, 0, 5]),
    ];

    for (name, p, modulus) in moduli {
        group.bench_with_input(BenchmarkId::new("modulus", name), &modulus, |b, modulus| {
            b.iter(|| FieldExtension::new(p, modulus).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_poly_multiplication,
    bench_simple_multiplication,
    bench_extension_inverse,
    bench_field_creation
);
criterion_main!(benches);

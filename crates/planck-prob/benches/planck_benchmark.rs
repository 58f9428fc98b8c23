use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use planck_prob::planck::{logpmf, LogPmf};

fn bench_planck_logpmf(c: &mut Criterion) {
    let xs: Vec<f64> = (0..10_000).map(|i| (i % 30) as f64).collect();

    c.bench_function("planck_logpmf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += logpmf(x, 0.5);
            }
            black_box(acc)
        })
    });

    let bound = LogPmf::new(0.5);
    c.bench_function("planck_logpmf_bound_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in &xs {
                acc += bound.evaluate(x);
            }
            black_box(acc)
        })
    });
}

criterion_group!(benches, bench_planck_logpmf);
criterion_main!(benches);

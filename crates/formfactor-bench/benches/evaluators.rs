//! Criterion micro-benchmarks for the general and restricted evaluators.

use criterion::{criterion_group, criterion_main, Criterion};
use formfactor_bench::{offsets, scaled_offsets};
use formfactor_core::{Real, ShapeFunction};
use formfactor_shapes::{Cic, Ngp, Pcs, Tsc};
use std::hint::black_box;

fn bench_shape<S: ShapeFunction>(c: &mut Criterion) {
    let general_input = offsets();
    let on_support_input = scaled_offsets(S::half_support());

    c.bench_function(&format!("{}_general_10k", S::NAME), |b| {
        b.iter(|| {
            let mut acc: Real = 0.0;
            for &x in &general_input {
                acc += S::charge_assignment(black_box(x));
            }
            black_box(acc)
        });
    });

    c.bench_function(&format!("{}_on_support_10k", S::NAME), |b| {
        b.iter(|| {
            let mut acc: Real = 0.0;
            for &x in &on_support_input {
                acc += S::charge_assignment_on_support(black_box(x));
            }
            black_box(acc)
        });
    });
}

fn bench_evaluators(c: &mut Criterion) {
    bench_shape::<Ngp>(c);
    bench_shape::<Cic>(c);
    bench_shape::<Tsc>(c);
    bench_shape::<Pcs>(c);
}

criterion_group!(benches, bench_evaluators);
criterion_main!(benches);

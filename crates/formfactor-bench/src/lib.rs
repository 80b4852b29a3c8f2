//! Shared fixtures for the formfactor benchmarks.

#![forbid(unsafe_code)]

use formfactor_core::Real;
use formfactor_test_utils::uniform_samples;

/// Seed for every benchmark sample set.
pub const BENCH_SEED: u64 = 0xbe9c_0001;

/// Number of samples per benchmark iteration.
pub const BENCH_SAMPLES: usize = 10_000;

/// Offsets spanning the widest built-in support, `[-2, 2)`, for the
/// general evaluator.
pub fn offsets() -> Vec<Real> {
    uniform_samples(BENCH_SEED, BENCH_SAMPLES, -2.0, 2.0)
}

/// Offsets inside `[-half, half)`, for the restricted evaluator.
pub fn scaled_offsets(half: Real) -> Vec<Real> {
    uniform_samples(BENCH_SEED, BENCH_SAMPLES, -half, half)
}

/// Particle positions spread over a 256-cell axis.
pub fn positions() -> Vec<Real> {
    uniform_samples(BENCH_SEED ^ 1, BENCH_SAMPLES, 0.0, 256.0)
}

/// Particle positions in a 64^3 box.
pub fn positions_3d() -> Vec<[Real; 3]> {
    let xs = uniform_samples(BENCH_SEED ^ 2, BENCH_SAMPLES, 0.0, 64.0);
    let ys = uniform_samples(BENCH_SEED ^ 3, BENCH_SAMPLES, 0.0, 64.0);
    let zs = uniform_samples(BENCH_SEED ^ 4, BENCH_SAMPLES, 0.0, 64.0);
    xs.into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| [x, y, z])
        .collect()
}

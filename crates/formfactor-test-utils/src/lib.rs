//! Test utilities and mock shapes for formfactor development.
//!
//! Provides deterministic coordinate samplers (seeded ChaCha8, identical
//! across platforms and runs) and deliberately broken [`ShapeFunction`]
//! implementations for exercising the compliance checks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use formfactor_core::{Real, ShapeFunction};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used when a test has no reason to pick its own.
pub const DEFAULT_SEED: u64 = 0x5eed_f0f0;

/// Sample count for partition-of-unity sweeps.
pub const PARTITION_SAMPLES: usize = 10_000;

/// NaN and both infinities.
pub const NON_FINITE: [Real; 3] = [Real::NAN, Real::INFINITY, Real::NEG_INFINITY];

/// `count` coordinates drawn uniformly from `[lo, hi)`.
///
/// The same seed always yields the same sequence.
pub fn uniform_samples(seed: u64, count: usize, lo: Real, hi: Real) -> Vec<Real> {
    assert!(lo < hi, "empty sample range [{lo}, {hi})");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let span = f64::from(hi) - f64::from(lo);
    (0..count)
        .map(|_| {
            // 53 random mantissa bits -> [0, 1).
            let u = (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
            let v = (f64::from(lo) + u * span) as Real;
            if v >= hi {
                hi.next_down()
            } else {
                v
            }
        })
        .collect()
}

/// `steps + 1` evenly spaced coordinates covering `[lo, hi]`.
pub fn lattice(lo: Real, hi: Real, steps: usize) -> Vec<Real> {
    let step = (f64::from(hi) - f64::from(lo)) / steps.max(1) as f64;
    (0..=steps)
        .map(|i| (f64::from(lo) + i as f64 * step) as Real)
        .collect()
}

/// Coordinates at and one ulp either side of `±half` and `±(half + 1)`,
/// plus zero.
pub fn boundary_offsets(half: Real) -> Vec<Real> {
    let mut out = vec![0.0];
    for edge in [-half - 1.0, -half, half, half + 1.0] {
        out.extend([edge.next_down(), edge, edge.next_up()]);
    }
    out
}

/// Order-0 shape with a closed support `[-1/2, 1/2]`.
///
/// A particle on a cell boundary is counted by both neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClosedNgp;

impl ShapeFunction for ClosedNgp {
    const SUPPORT: u32 = 1;
    const ORDER: u32 = 0;
    const NAME: &'static str = "closed-ngp";

    fn charge_assignment(x: Real) -> Real {
        if (-0.5..=0.5).contains(&x) {
            1.0
        } else {
            0.0
        }
    }

    fn charge_assignment_on_support(_x: Real) -> Real {
        1.0
    }
}

/// Order-0 shape with an open support `(-1/2, 1/2)`.
///
/// A particle on a cell boundary is counted by neither neighbour.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OpenNgp;

impl ShapeFunction for OpenNgp {
    const SUPPORT: u32 = 1;
    const ORDER: u32 = 0;
    const NAME: &'static str = "open-ngp";

    fn charge_assignment(x: Real) -> Real {
        if -0.5 < x && x < 0.5 {
            1.0
        } else {
            0.0
        }
    }

    fn charge_assignment_on_support(_x: Real) -> Real {
        1.0
    }
}

/// Linear shape whose restricted evaluator disagrees with the general one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkewedCic;

impl ShapeFunction for SkewedCic {
    const SUPPORT: u32 = 2;
    const ORDER: u32 = 1;
    const NAME: &'static str = "skewed-cic";

    fn charge_assignment(x: Real) -> Real {
        let a = x.abs();
        if a < 1.0 {
            1.0 - a
        } else {
            0.0
        }
    }

    fn charge_assignment_on_support(x: Real) -> Real {
        0.5 * (1.0 - x.abs())
    }
}

/// Linear shape declaring half a cell of support for a two-point window.
///
/// The assignment window hands it offsets up to a full cell away.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NarrowCic;

impl ShapeFunction for NarrowCic {
    const SUPPORT: u32 = 2;
    const ORDER: u32 = 1;
    const NAME: &'static str = "narrow-cic";

    fn half_support() -> Real {
        0.5
    }

    fn charge_assignment(x: Real) -> Real {
        let a = x.abs();
        if a < 1.0 {
            1.0 - a
        } else {
            0.0
        }
    }

    fn charge_assignment_on_support(x: Real) -> Real {
        1.0 - x.abs()
    }
}

/// Order-0 top hat inside a three-cell window.
///
/// Conforming, but not a B-spline: the support is wider than `ORDER + 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddedNgp;

impl ShapeFunction for PaddedNgp {
    const SUPPORT: u32 = 3;
    const ORDER: u32 = 0;
    const NAME: &'static str = "padded-ngp";

    fn charge_assignment(x: Real) -> Real {
        if (-0.5..0.5).contains(&x) {
            1.0
        } else {
            0.0
        }
    }

    fn charge_assignment_on_support(x: Real) -> Real {
        Self::charge_assignment(x)
    }
}

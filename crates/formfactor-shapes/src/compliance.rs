//! ShapeFunction contract compliance helpers.
//!
//! These functions verify that a shape satisfies the invariants documented
//! on [`ShapeFunction`]. Reused across every shape's test module and by the
//! negative tests against the broken mocks in `formfactor-test-utils`.

use crate::window::AxisWeights;
use formfactor_core::{Real, ShapeFunction, WEIGHT_TOLERANCE};
use formfactor_test_utils::{
    boundary_offsets, lattice, uniform_samples, DEFAULT_SEED, NON_FINITE, PARTITION_SAMPLES,
};

/// Assert the support is at least one cell.
pub fn assert_support_positive<S: ShapeFunction>() {
    assert!(S::SUPPORT >= 1, "{}: SUPPORT must be >= 1", S::NAME);
}

/// Assert the support is that of a B-spline, one cell wider than the order.
///
/// Not part of [`run_full_compliance`]: other members may pad their window.
pub fn assert_bspline_support<S: ShapeFunction>() {
    assert_eq!(
        S::SUPPORT,
        S::ORDER + 1,
        "{}: B-spline support should be ORDER + 1",
        S::NAME
    );
}

/// Assert `charge_assignment(x) == 0` for every `x` outside the support.
pub fn assert_zero_outside_support<S: ShapeFunction>(xs: &[Real]) {
    for &x in xs.iter().filter(|&&x| !S::in_support(x)) {
        let w = S::charge_assignment(x);
        assert_eq!(w, 0.0, "{}: W({x}) = {w} outside support", S::NAME);
    }
}

/// Assert both evaluators agree bit for bit inside the support.
pub fn assert_on_support_agrees<S: ShapeFunction>(xs: &[Real]) {
    for &x in xs.iter().filter(|&&x| S::in_support(x)) {
        let general = S::charge_assignment(x);
        let restricted = S::charge_assignment_on_support(x);
        assert_eq!(
            general.to_bits(),
            restricted.to_bits(),
            "{}: W({x}) = {general} but on-support W({x}) = {restricted}",
            S::NAME
        );
    }
}

/// Assert every weight lies in `[0, 1]`.
pub fn assert_weights_in_unit_interval<S: ShapeFunction>(xs: &[Real]) {
    for &x in xs {
        let w = S::charge_assignment(x);
        assert!(
            (0.0..=1.0).contains(&w),
            "{}: W({x}) = {w} outside [0, 1]",
            S::NAME
        );
    }
}

/// Assert the support is half-open: the left edge is inside, the right
/// edge and anything left of the left edge are outside.
pub fn assert_support_half_open<S: ShapeFunction>() {
    let h = S::half_support();
    assert_eq!(
        S::charge_assignment(-h),
        S::charge_assignment_on_support(-h),
        "{}: left edge -{h} must be inside the support",
        S::NAME
    );
    assert_eq!(S::charge_assignment(h), 0.0, "{}: W({h}) != 0", S::NAME);
    assert_eq!(
        S::charge_assignment((-h).next_down()),
        0.0,
        "{}: W just left of -{h} != 0",
        S::NAME
    );
}

/// Assert NaN and infinities yield zero weight.
pub fn assert_non_finite_outside_support<S: ShapeFunction>() {
    for x in NON_FINITE {
        assert_eq!(S::charge_assignment(x), 0.0, "{}: W({x}) != 0", S::NAME);
    }
}

/// Assert that for each position `p`, `charge_assignment(p - k)` summed
/// over every integer `k` near `p` equals 1.
///
/// The `k` range is computed independently of the assignment window so
/// the check does not trust the code it is testing.
pub fn assert_partition_of_unity<S: ShapeFunction>(positions: &[Real]) {
    let h = S::half_support();
    for &p in positions {
        let lo = (p - h).floor() as i64 - 1;
        let hi = (p + h).ceil() as i64 + 1;
        let sum: Real = (lo..=hi).map(|k| S::charge_assignment(p - k as Real)).sum();
        assert!(
            (sum - 1.0).abs() <= WEIGHT_TOLERANCE,
            "{}: weights at position {p} sum to {sum}",
            S::NAME
        );
    }
}

/// Assert the assignment window reproduces the general evaluator.
pub fn assert_window_matches_general<S: ShapeFunction>(positions: &[Real]) {
    for &p in positions {
        let window = AxisWeights::<S>::new(p);
        assert_eq!(window.len(), S::SUPPORT as usize);
        for (k, w) in window.iter() {
            let expected = S::charge_assignment(p - k as Real);
            assert_eq!(
                w, expected,
                "{}: window weight at k = {k} for position {p} differs",
                S::NAME
            );
        }
    }
}

/// Run every compliance check on `S` over deterministic sample sets.
pub fn run_full_compliance<S: ShapeFunction>() {
    let h = S::half_support();
    let mut offsets = lattice(-h - 2.0, h + 2.0, 4096);
    offsets.extend(boundary_offsets(h));
    offsets.extend(uniform_samples(DEFAULT_SEED, 4096, -h - 1.0, h + 1.0));

    let mut positions = uniform_samples(DEFAULT_SEED ^ 1, PARTITION_SAMPLES, -1.0e3, 1.0e3);
    positions.extend(lattice(-4.0, 4.0, 64));

    assert_support_positive::<S>();
    assert_zero_outside_support::<S>(&offsets);
    assert_on_support_agrees::<S>(&offsets);
    assert_weights_in_unit_interval::<S>(&offsets);
    assert_support_half_open::<S>();
    assert_non_finite_outside_support::<S>();
    assert_partition_of_unity::<S>(&positions);
    assert_window_matches_general::<S>(&positions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfactor_test_utils::{ClosedNgp, OpenNgp, PaddedNgp, SkewedCic};

    // Particles sitting exactly on cell boundaries.
    fn boundary_positions() -> Vec<Real> {
        lattice(-3.5, 3.5, 7)
    }

    #[test]
    #[should_panic(expected = "closed-ngp: weights at position")]
    fn closed_support_double_counts() {
        assert_partition_of_unity::<ClosedNgp>(&boundary_positions());
    }

    #[test]
    #[should_panic(expected = "open-ngp: weights at position")]
    fn open_support_loses_charge() {
        assert_partition_of_unity::<OpenNgp>(&boundary_positions());
    }

    #[test]
    #[should_panic(expected = "open-ngp: left edge")]
    fn open_support_fails_half_open_check() {
        assert_support_half_open::<OpenNgp>();
    }

    #[test]
    #[should_panic(expected = "skewed-cic: W(")]
    fn skewed_restricted_evaluator_detected() {
        assert_on_support_agrees::<SkewedCic>(&[0.25]);
    }

    #[test]
    fn padded_support_is_compliant() {
        run_full_compliance::<PaddedNgp>();
    }

    #[test]
    #[should_panic(expected = "padded-ngp: B-spline support")]
    fn padded_support_is_not_a_bspline() {
        assert_bspline_support::<PaddedNgp>();
    }

    #[test]
    fn closed_and_open_agree_away_from_boundaries() {
        let interior = [-0.25, 0.0, 0.25, 0.75, -0.75];
        assert_on_support_agrees::<ClosedNgp>(&interior);
        assert_on_support_agrees::<OpenNgp>(&interior);
    }
}

//! Per-axis assignment windows and tensor-product composition.
//!
//! A particle touches exactly `SUPPORT` grid points per axis. [`AxisWeights`]
//! finds the first of them and evaluates the restricted evaluator at each,
//! [`TensorWeights`] multiplies axes together for 2-D and 3-D deposition.
//!
//! Positions are in grid-cell units, with grid point `k` at position `k`.
//! Odd supports centre on the nearest grid point, even supports on the
//! grid point at or below the particle.

use formfactor_core::{Real, ShapeFunction, WEIGHT_TOLERANCE};
use smallvec::SmallVec;
use std::marker::PhantomData;

/// Inline capacity of an axis window; covers every built-in shape.
const INLINE_SUPPORT: usize = 4;

/// Exclusive bound on `|position|` for window construction.
///
/// Beyond `2^MANTISSA_DIGITS` adjacent integers are no longer distinct
/// [`Real`] values, so a particle cannot be placed relative to its grid
/// points. Positions at or past the bound are a contract violation, caught
/// by a debug assertion; release builds saturate the grid index instead of
/// wrapping.
pub const MAX_POSITION: Real = (1u64 << Real::MANTISSA_DIGITS) as Real;

/// Grid point the window is anchored on, and the particle's offset from it.
///
/// For odd supports the offset lies in `[-1/2, 1/2)`, for even supports in
/// `[0, 1)`. The rounding fix-up keeps the computed offset inside that range
/// when `floor` of a shifted position lands on the wrong side.
fn anchor<S: ShapeFunction>(position: Real) -> (i64, Real) {
    debug_assert!(
        position.is_finite(),
        "formfactor: non-finite particle position {position}"
    );
    debug_assert!(
        position.abs() < MAX_POSITION,
        "formfactor: particle position {position} outside (-{MAX_POSITION}, {MAX_POSITION})"
    );
    let (shift, lo, hi): (Real, Real, Real) = if S::SUPPORT % 2 == 1 {
        (0.5, -0.5, 0.5)
    } else {
        (0.0, 0.0, 1.0)
    };
    let mut k = (position + shift).floor() as i64;
    let mut d = position - k as Real;
    if d >= hi {
        k = k.saturating_add(1);
        d = position - k as Real;
    } else if d < lo {
        k = k.saturating_sub(1);
        d = position - k as Real;
    }
    (k, d)
}

/// Index of the first of the `S::SUPPORT` grid points touched by a particle
/// at `position`.
///
/// `position` must be finite with `|position| <` [`MAX_POSITION`].
///
/// # Examples
///
/// ```
/// use formfactor_shapes::{window_start, Cic, Ngp, Tsc};
///
/// assert_eq!(window_start::<Ngp>(2.4), 2);
/// assert_eq!(window_start::<Ngp>(2.5), 3);
/// assert_eq!(window_start::<Cic>(2.5), 2);
/// assert_eq!(window_start::<Tsc>(2.4), 1);
/// ```
pub fn window_start<S: ShapeFunction>(position: Real) -> i64 {
    let (k, _) = anchor::<S>(position);
    k.saturating_sub(i64::from((S::SUPPORT - 1) / 2))
}

/// Product of per-axis weights.
///
/// An empty slice yields `1`, the weight of a zero-dimensional point.
#[inline]
pub fn tensor_weight(axis_weights: &[Real]) -> Real {
    axis_weights.iter().product()
}

/// The `S::SUPPORT` weights one particle deposits along a single axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisWeights<S: ShapeFunction> {
    start: i64,
    weights: SmallVec<[Real; INLINE_SUPPORT]>,
    _shape: PhantomData<S>,
}

impl<S: ShapeFunction> AxisWeights<S> {
    /// Evaluate the window for a particle at `position`.
    ///
    /// `position` must be finite with `|position| <` [`MAX_POSITION`]. Every
    /// offset handed to the restricted evaluator is checked against the
    /// support in debug builds.
    pub fn new(position: Real) -> Self {
        let start = window_start::<S>(position);
        let weights: SmallVec<[Real; INLINE_SUPPORT]> = (0..i64::from(S::SUPPORT))
            .map(|j| {
                let x = position - start.saturating_add(j) as Real;
                // Closed on the right: rounding may land an outer offset on
                // +SUPPORT/2, where every continuous kernel is already zero.
                debug_assert!(
                    -S::half_support() <= x && x <= S::half_support(),
                    "formfactor: {} offset {x} outside support at position {position}",
                    S::NAME
                );
                S::charge_assignment_on_support(x)
            })
            .collect();

        #[cfg(debug_assertions)]
        {
            let sum: Real = weights.iter().sum();
            if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
                eprintln!(
                    "formfactor: {} window at position {position} sums to {sum}",
                    S::NAME
                );
            }
        }

        Self {
            start,
            weights,
            _shape: PhantomData,
        }
    }

    /// Index of the first grid point in the window.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Number of grid points in the window, always `S::SUPPORT`.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`: every shape has a support of at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Weights in grid-point order.
    pub fn weights(&self) -> &[Real] {
        &self.weights
    }

    /// `(grid index, weight)` pairs in grid-point order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Real)> + '_ {
        (0..)
            .map(move |j| self.start.saturating_add(j))
            .zip(self.weights.iter().copied())
    }

    /// Total weight of the window; `1` up to rounding.
    pub fn sum(&self) -> Real {
        self.weights.iter().sum()
    }

    /// Whether the total weight is within [`WEIGHT_TOLERANCE`] of `1`.
    pub fn is_conserving(&self) -> bool {
        (self.sum() - 1.0).abs() <= WEIGHT_TOLERANCE
    }
}

/// The `S::SUPPORT^D` composed weights of one particle in `D` dimensions.
///
/// # Examples
///
/// ```
/// use formfactor_shapes::{Cic, TensorWeights};
///
/// let w = TensorWeights::<Cic, 2>::new([0.5, 1.25]);
/// assert_eq!(w.len(), 4);
/// let total: f64 = w.iter().map(|(_, wt)| f64::from(wt)).sum();
/// assert!((total - 1.0).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TensorWeights<S: ShapeFunction, const D: usize> {
    axes: [AxisWeights<S>; D],
}

impl<S: ShapeFunction, const D: usize> TensorWeights<S, D> {
    /// Evaluate every axis window for a particle at `position`.
    pub fn new(position: [Real; D]) -> Self {
        Self {
            axes: position.map(AxisWeights::new),
        }
    }

    /// Per-axis windows, in axis order.
    pub fn axes(&self) -> &[AxisWeights<S>; D] {
        &self.axes
    }

    /// Number of grid points touched, `S::SUPPORT^D`.
    pub fn len(&self) -> usize {
        self.axes.iter().map(AxisWeights::len).product()
    }

    /// Always `false`: even zero dimensions touch one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(grid index, weight)` for every touched point.
    ///
    /// The last axis varies fastest.
    pub fn iter(&self) -> TensorIter<'_, S, D> {
        TensorIter {
            axes: &self.axes,
            cursor: [0; D],
            done: false,
        }
    }

    /// Total composed weight; `1` up to rounding.
    pub fn sum(&self) -> Real {
        self.iter().map(|(_, w)| w).sum()
    }
}

/// Iterator over the points of a [`TensorWeights`].
#[derive(Debug)]
pub struct TensorIter<'a, S: ShapeFunction, const D: usize> {
    axes: &'a [AxisWeights<S>; D],
    cursor: [usize; D],
    done: bool,
}

impl<S: ShapeFunction, const D: usize> Iterator for TensorIter<'_, S, D> {
    type Item = ([i64; D], Real);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut index = [0i64; D];
        let mut weight: Real = 1.0;
        for (axis, (&c, ax)) in self.cursor.iter().zip(self.axes.iter()).enumerate() {
            index[axis] = ax.start.saturating_add(c as i64);
            weight *= ax.weights[c];
        }

        // Odometer increment, last axis fastest.
        self.done = true;
        for axis in (0..D).rev() {
            self.cursor[axis] += 1;
            if self.cursor[axis] < self.axes[axis].len() {
                self.done = false;
                break;
            }
            self.cursor[axis] = 0;
        }
        Some((index, weight))
    }
}

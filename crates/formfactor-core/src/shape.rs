//! The shape-function (form-factor) contract.

use crate::real::Real;
use std::fmt::Debug;

/// A particle shape: the kernel that spreads a macro-particle's charge onto
/// grid points (deposition) and gathers field values back at the particle
/// position (interpolation).
///
/// Implementors are zero-sized, stateless marker types. The active shape is
/// picked when the simulation is built and flows through the deposition
/// code as a generic parameter, so every call is statically dispatched and
/// inlined. There is no `dyn ShapeFunction`.
///
/// # Coordinates
///
/// Both evaluators take `x`, the signed distance from the particle to one
/// candidate grid point along one axis, in grid-cell units. Callers build
/// multi-dimensional weights as the product of per-axis weights.
///
/// # Contract
///
/// Let `h = SUPPORT / 2`. Every implementation must guarantee:
///
/// 1. `charge_assignment(x) == 0` for `x` outside `[-h, h)`.
/// 2. `charge_assignment(x) == charge_assignment_on_support(x)`, bit for bit,
///    for `x` inside `[-h, h)`.
/// 3. Partition of unity: for any position `p`, the weights
///    `charge_assignment(p - k)` summed over the `SUPPORT` integer grid
///    points `k` that cover the support add up to 1.
/// 4. Every weight lies in `[0, 1]`.
/// 5. The support interval is half-open. A particle sitting exactly on a
///    cell boundary belongs to exactly one neighbouring cell, so boundary
///    positions neither double-count nor lose charge.
///
/// Evaluations are pure: no allocation, no locks, no shared state. The same
/// input yields the same bits on every thread, which keeps the summed
/// charge of a parallel deposition independent of how work was split.
///
/// # Adding a shape
///
/// Choose a support width consistent with the polynomial degree and the
/// centering convention (odd supports centre on the nearest grid point,
/// even supports on the cell the particle sits in), show partition of unity
/// for the piecewise formula, and make both evaluators agree on the
/// half-open boundary.
///
/// # Examples
///
/// ```
/// use formfactor_core::{Real, ShapeFunction};
///
/// #[derive(Clone, Copy, Debug, Default)]
/// struct TopHat;
///
/// impl ShapeFunction for TopHat {
///     const SUPPORT: u32 = 1;
///     const ORDER: u32 = 0;
///     const NAME: &'static str = "top-hat";
///
///     fn charge_assignment(x: Real) -> Real {
///         if Self::in_support(x) { 1.0 } else { 0.0 }
///     }
///
///     fn charge_assignment_on_support(_x: Real) -> Real {
///         1.0
///     }
/// }
///
/// assert_eq!(TopHat::charge_assignment(-0.5), 1.0);
/// assert_eq!(TopHat::charge_assignment(0.5), 0.0);
/// assert_eq!(TopHat::half_support(), 0.5);
/// ```
pub trait ShapeFunction: Copy + Default + Debug + Send + Sync + 'static {
    /// Width of the compact support in grid cells. Always at least 1.
    ///
    /// Deposition loops visit exactly this many grid points per axis.
    const SUPPORT: u32;

    /// Polynomial degree of the kernel.
    const ORDER: u32;

    /// Short lowercase name, used in diagnostics and benchmark labels.
    const NAME: &'static str;

    /// Weight of the grid point at signed distance `x`.
    ///
    /// Total over the reals. NaN and infinities are treated as outside the
    /// support and yield `0`.
    fn charge_assignment(x: Real) -> Real;

    /// Weight of the grid point at signed distance `x`, for `x` already
    /// known to lie in `[-SUPPORT/2, SUPPORT/2)`.
    ///
    /// This skips the support check on the innermost loop of deposition.
    /// Calling it outside the support is a caller bug; the result is
    /// unspecified but never undefined behaviour.
    fn charge_assignment_on_support(x: Real) -> Real;

    /// Half the support width, `SUPPORT / 2`.
    #[inline]
    fn half_support() -> Real {
        Self::SUPPORT as Real * 0.5
    }

    /// Whether `x` lies in the half-open support `[-SUPPORT/2, SUPPORT/2)`.
    ///
    /// Returns `false` for NaN.
    #[inline]
    fn in_support(x: Real) -> bool {
        let h = Self::half_support();
        -h <= x && x < h
    }
}

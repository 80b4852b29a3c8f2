//! Triangular-shaped-cloud (order 2) shape.

use formfactor_core::{Real, ShapeFunction};

/// Triangular-shaped cloud: quadratic B-spline over three grid points.
///
/// ```text
///        | 3/4 - x^2              if |x| < 1/2
/// W(x) = | 1/2 (3/2 - |x|)^2      if 1/2 <= |x| < 3/2
///        | 0                      otherwise
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tsc;

impl Tsc {
    #[inline]
    fn centre(a: Real) -> Real {
        0.75 - a * a
    }

    #[inline]
    fn flank(a: Real) -> Real {
        let b = 1.5 - a;
        0.5 * b * b
    }
}

impl ShapeFunction for Tsc {
    const SUPPORT: u32 = 3;
    const ORDER: u32 = 2;
    const NAME: &'static str = "tsc";

    #[inline]
    fn charge_assignment(x: Real) -> Real {
        let a = x.abs();
        if a < 0.5 {
            Self::centre(a)
        } else if a < 1.5 {
            Self::flank(a)
        } else {
            0.0
        }
    }

    #[inline]
    fn charge_assignment_on_support(x: Real) -> Real {
        let a = x.abs();
        if a < 0.5 {
            Self::centre(a)
        } else {
            Self::flank(a)
        }
    }
}

//! Piecewise-cubic-spline (order 3) shape.

use formfactor_core::{Real, ShapeFunction};

/// Piecewise cubic spline: cubic B-spline over four grid points.
///
/// ```text
///        | 2/3 - x^2 + |x|^3 / 2   if |x| < 1
/// W(x) = | (2 - |x|)^3 / 6         if 1 <= |x| < 2
///        | 0                       otherwise
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pcs;

impl Pcs {
    #[inline]
    fn centre(a: Real) -> Real {
        let a2 = a * a;
        2.0 / 3.0 - a2 + 0.5 * a2 * a
    }

    #[inline]
    fn flank(a: Real) -> Real {
        let b = 2.0 - a;
        b * b * b / 6.0
    }
}

impl ShapeFunction for Pcs {
    const SUPPORT: u32 = 4;
    const ORDER: u32 = 3;
    const NAME: &'static str = "pcs";

    #[inline]
    fn charge_assignment(x: Real) -> Real {
        let a = x.abs();
        if a < 1.0 {
            Self::centre(a)
        } else if a < 2.0 {
            Self::flank(a)
        } else {
            0.0
        }
    }

    #[inline]
    fn charge_assignment_on_support(x: Real) -> Real {
        let a = x.abs();
        if a < 1.0 {
            Self::centre(a)
        } else {
            Self::flank(a)
        }
    }
}

//! Cloud-in-cell (order 1) shape.

use formfactor_core::{Real, ShapeFunction};

/// Cloud-in-cell: linear weighting onto the two enclosing grid points.
///
/// ```text
///        | 1 - |x|   if |x| < 1
/// W(x) = |
///        | 0         otherwise
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cic;

impl ShapeFunction for Cic {
    const SUPPORT: u32 = 2;
    const ORDER: u32 = 1;
    const NAME: &'static str = "cic";

    #[inline]
    fn charge_assignment(x: Real) -> Real {
        let a = x.abs();
        if a < 1.0 {
            1.0 - a
        } else {
            0.0
        }
    }

    #[inline]
    fn charge_assignment_on_support(x: Real) -> Real {
        1.0 - x.abs()
    }
}

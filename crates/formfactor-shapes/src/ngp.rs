//! Nearest-grid-point (order 0) shape.

use formfactor_core::{Real, ShapeFunction};

/// Nearest-grid-point assignment: the whole charge goes to one grid point.
///
/// ```text
///        | 1   if -1/2 <= x < 1/2
/// W(x) = |
///        | 0   otherwise
/// ```
///
/// The interval is closed on the left and open on the right. A particle
/// exactly halfway between two grid points belongs to the one on its right
/// (the point at offset `x = -1/2`), never to both and never to neither.
///
/// # Examples
///
/// ```
/// use formfactor_core::ShapeFunction;
/// use formfactor_shapes::Ngp;
///
/// assert_eq!(Ngp::SUPPORT, 1);
/// assert_eq!(Ngp::charge_assignment(0.4999), 1.0);
/// assert_eq!(Ngp::charge_assignment(-0.5), 1.0);
/// assert_eq!(Ngp::charge_assignment(0.5), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ngp;

impl ShapeFunction for Ngp {
    const SUPPORT: u32 = 1;
    const ORDER: u32 = 0;
    const NAME: &'static str = "ngp";

    #[inline]
    fn charge_assignment(x: Real) -> Real {
        let inside = -0.5 <= x && x < 0.5;
        Real::from(u8::from(inside))
    }

    /// The support is a single cell of constant weight, so the input is
    /// ignored.
    #[inline]
    fn charge_assignment_on_support(_x: Real) -> Real {
        1.0
    }
}

//! Bridging a configured [`ShapeKind`] to a statically known shape type.
//!
//! Configuration arrives as data (`"tsc"`, order `2`), but the hot path
//! must be monomorphized over a concrete [`ShapeFunction`]. [`dispatch`]
//! performs that conversion once, at setup time, by calling a generic
//! visitor with the matching type parameter.

use crate::{Cic, Ngp, Pcs, Tsc};
use formfactor_core::{ShapeFunction, ShapeKind};

/// Code that is generic over the active shape.
///
/// Implement this for the entry point of a deposition or interpolation
/// routine; [`dispatch`] instantiates it for the configured shape.
///
/// # Examples
///
/// ```
/// use formfactor_core::{Real, ShapeFunction, ShapeKind};
/// use formfactor_shapes::{dispatch, ShapeVisitor};
///
/// struct CentreWeight;
///
/// impl ShapeVisitor for CentreWeight {
///     type Output = Real;
///     fn visit<S: ShapeFunction>(self) -> Real {
///         S::charge_assignment(0.0)
///     }
/// }
///
/// let kind: ShapeKind = "tsc".parse().unwrap();
/// assert_eq!(dispatch(kind, CentreWeight), 0.75);
/// ```
pub trait ShapeVisitor {
    /// Value produced by the visit.
    type Output;

    /// Run with `S` as the active shape.
    fn visit<S: ShapeFunction>(self) -> Self::Output;
}

/// Instantiate `visitor` for the shape named by `kind`.
pub fn dispatch<V: ShapeVisitor>(kind: ShapeKind, visitor: V) -> V::Output {
    match kind {
        ShapeKind::Ngp => visitor.visit::<Ngp>(),
        ShapeKind::Cic => visitor.visit::<Cic>(),
        ShapeKind::Tsc => visitor.visit::<Tsc>(),
        ShapeKind::Pcs => visitor.visit::<Pcs>(),
    }
}

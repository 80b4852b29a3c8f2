//! Configuration-time identifiers for the built-in shapes.

use crate::error::ShapeError;
use std::fmt;
use std::str::FromStr;

/// Names one built-in member of the shape family.
///
/// `ShapeKind` is plain data for configuration files, command lines and
/// reports. It carries no evaluators: the deposition code turns it into a
/// concrete type exactly once, through `formfactor_shapes::dispatch`, and
/// runs statically from there.
///
/// # Examples
///
/// ```
/// use formfactor_core::ShapeKind;
///
/// let kind: ShapeKind = "tsc".parse().unwrap();
/// assert_eq!(kind, ShapeKind::Tsc);
/// assert_eq!(kind.support(), 3);
/// assert_eq!(ShapeKind::from_order(1).unwrap(), ShapeKind::Cic);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// Nearest grid point, order 0, support 1.
    Ngp,
    /// Cloud in cell, order 1, support 2.
    Cic,
    /// Triangular-shaped cloud, order 2, support 3.
    Tsc,
    /// Piecewise cubic spline, order 3, support 4.
    Pcs,
}

impl ShapeKind {
    /// Every built-in shape, in ascending order.
    pub const ALL: [ShapeKind; 4] = [Self::Ngp, Self::Cic, Self::Tsc, Self::Pcs];

    /// Width of the compact support in grid cells.
    pub const fn support(self) -> u32 {
        self.order() + 1
    }

    /// Polynomial degree of the kernel.
    pub const fn order(self) -> u32 {
        match self {
            Self::Ngp => 0,
            Self::Cic => 1,
            Self::Tsc => 2,
            Self::Pcs => 3,
        }
    }

    /// Canonical short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ngp => "ngp",
            Self::Cic => "cic",
            Self::Tsc => "tsc",
            Self::Pcs => "pcs",
        }
    }

    /// Look up the shape with the given polynomial order.
    pub fn from_order(order: u32) -> Result<Self, ShapeError> {
        Self::ALL
            .into_iter()
            .find(|k| k.order() == order)
            .ok_or(ShapeError::UnsupportedOrder { order })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Accepts the short names and their spelled-out forms, ignoring case
    /// and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ngp" | "nearest-grid-point" => Ok(Self::Ngp),
            "cic" | "cloud-in-cell" => Ok(Self::Cic),
            "tsc" | "triangular-shaped-cloud" => Ok(Self::Tsc),
            "pcs" | "piecewise-cubic-spline" => Ok(Self::Pcs),
            _ => Err(ShapeError::UnknownShape { name: s.to_string() }),
        }
    }
}

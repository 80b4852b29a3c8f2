//! Build-time floating-point precision.
//!
//! Every weight and coordinate in the family is a [`Real`]. The default is
//! `f32`; enabling the `f64` cargo feature switches the whole workspace to
//! double precision. The choice is fixed for a build and never varies at
//! runtime.

/// Scalar type for coordinates and weights.
#[cfg(not(feature = "f64"))]
pub type Real = f32;

/// Scalar type for coordinates and weights.
#[cfg(feature = "f64")]
pub type Real = f64;

/// Absolute tolerance when comparing a summed weight window against 1.
///
/// Individual weights of the order-0 shape are exact; higher orders
/// accumulate a few ulps of rounding through their polynomials.
#[cfg(not(feature = "f64"))]
pub const WEIGHT_TOLERANCE: Real = 1e-5;

/// Absolute tolerance when comparing a summed weight window against 1.
///
/// Individual weights of the order-0 shape are exact; higher orders
/// accumulate a few ulps of rounding through their polynomials.
#[cfg(feature = "f64")]
pub const WEIGHT_TOLERANCE: Real = 1e-12;

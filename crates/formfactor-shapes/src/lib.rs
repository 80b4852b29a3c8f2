//! Particle shape functions for particle-in-cell deposition and
//! interpolation.
//!
//! This crate provides the built-in members of the [`ShapeFunction`]
//! family, the per-axis assignment window that feeds them, and the
//! tensor-product composition used for multi-dimensional grids.
//!
//! # Shapes
//!
//! - [`Ngp`]: nearest grid point, order 0, support 1
//! - [`Cic`]: cloud in cell, order 1, support 2
//! - [`Tsc`]: triangular-shaped cloud, order 2, support 3
//! - [`Pcs`]: piecewise cubic spline, order 3, support 4
//!
//! # Selection
//!
//! Shapes are chosen statically. A [`ShapeKind`] read from configuration is
//! turned into a type parameter once via [`dispatch`].
//!
//! [`ShapeFunction`]: formfactor_core::ShapeFunction
//! [`ShapeKind`]: formfactor_core::ShapeKind

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cic;
pub mod ngp;
pub mod pcs;
pub mod select;
pub mod tsc;
pub mod window;

#[cfg(test)]
pub(crate) mod compliance;

pub use cic::Cic;
pub use ngp::Ngp;
pub use pcs::Pcs;
pub use select::{dispatch, ShapeVisitor};
pub use tsc::Tsc;
pub use window::{
    tensor_weight, window_start, AxisWeights, TensorIter, TensorWeights, MAX_POSITION,
};

//! Core types and traits for the formfactor shape-function family.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions every particle shape builds on: the [`Real`] scalar,
//! the [`ShapeFunction`] contract, the [`ShapeKind`] identifier used at
//! configuration time, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod kind;
pub mod real;
pub mod shape;

pub use error::ShapeError;
pub use kind::ShapeKind;
pub use real::{Real, WEIGHT_TOLERANCE};
pub use shape::ShapeFunction;

//! formfactor: particle shape functions for particle-in-cell simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the formfactor sub-crates. For most users, adding `formfactor` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use formfactor::prelude::*;
//!
//! // Deposit a unit charge at x = 3.25 onto a 1-D grid with CIC.
//! let mut rho = vec![0.0 as Real; 8];
//! for (k, w) in AxisWeights::<Cic>::new(3.25).iter() {
//!     rho[k as usize] += w;
//! }
//! assert_eq!(rho[3], 0.75);
//! assert_eq!(rho[4], 0.25);
//!
//! // Pick the shape from configuration, then run statically.
//! struct Total(Real);
//! impl ShapeVisitor for Total {
//!     type Output = Real;
//!     fn visit<S: ShapeFunction>(self) -> Real {
//!         TensorWeights::<S, 3>::new([self.0; 3]).sum()
//!     }
//! }
//! let kind: ShapeKind = "pcs".parse().unwrap();
//! let total = dispatch(kind, Total(1.3));
//! assert!((total - 1.0).abs() < 1e-5);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `formfactor-core` | `Real`, the `ShapeFunction` trait, `ShapeKind`, errors |
//! | [`shapes`] | `formfactor-shapes` | NGP, CIC, TSC, PCS, assignment windows, dispatch |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the shape-function contract (`formfactor-core`).
pub use formfactor_core as types;

/// Concrete shapes, assignment windows and dispatch (`formfactor-shapes`).
pub use formfactor_shapes as shapes;

/// Common imports for typical formfactor usage.
///
/// ```rust
/// use formfactor::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use formfactor_core::{Real, ShapeError, ShapeFunction, ShapeKind};

    // Shapes
    pub use formfactor_shapes::{Cic, Ngp, Pcs, Tsc};

    // Windows and selection
    pub use formfactor_shapes::{
        dispatch, tensor_weight, window_start, AxisWeights, ShapeVisitor, TensorWeights,
    };
}

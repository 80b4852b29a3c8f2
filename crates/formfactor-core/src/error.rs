//! Error types for the formfactor family.
//!
//! Evaluators never fail. Errors only arise at the configuration boundary,
//! when a shape is named in a config file or on a command line and has to
//! be mapped onto a statically known family member.

use std::error::Error;
use std::fmt;

/// Errors from selecting a shape at configuration time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The name does not match any member of the family.
    UnknownShape {
        /// The name as given.
        name: String,
    },
    /// No member of the family has this interpolation order.
    UnsupportedOrder {
        /// The requested polynomial order.
        order: u32,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownShape { name } => write!(f, "unknown shape '{name}'"),
            Self::UnsupportedOrder { order } => {
                write!(f, "no shape of order {order} (supported: 0..=3)")
            }
        }
    }
}

impl Error for ShapeError {}

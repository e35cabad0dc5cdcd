//! Errors observable at the [`crate::engine`] boundary.
//!
//! Only precondition failures and (hypothetically) internal solver failures
//! live here -- "no layout" is a normal result (`Ok(None)`), not an error,
//! per the error-handling design this module implements.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("number of displays must be positive, got {0}")]
    NoDisplays(usize),
    #[error("display {index} has non-positive size {width}x{height}")]
    NonPositiveSize {
        index: usize,
        width: i32,
        height: i32,
    },
    #[error("constraint matrix is {got}x{got}, expected {expected}x{expected}")]
    MatrixSizeMismatch { expected: usize, got: usize },
    #[error("constraint matrix is not symmetric under inversion")]
    AsymmetricMatrix,
    #[error("virtual screen bounds are inverted: w_min={w_min} > w_max={w_max} or h_min={h_min} > h_max={h_max}")]
    InvertedBounds {
        w_min: i32,
        w_max: i32,
        h_min: i32,
        h_max: i32,
    },
    /// No analogue exists in the hand-rolled solver used here (there is no
    /// external library call that could fail), but the variant is kept so a
    /// future pluggable solver backend can report failures without changing
    /// this enum's shape.
    #[error("internal solver error: {0}")]
    Internal(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

//! The layout engine: a geometry solver that, given display sizes and a
//! set of pairwise directional constraints, finds the arrangement that
//! packs them most tightly and aligns their neighbors best.
//!
//! Single-threaded, synchronous, and free of I/O -- a [`compute_layout`]
//! call is a pure function of its inputs, safe to invoke from any thread
//! the caller chooses, as long as two concurrent calls don't share state
//! (there is none to share; every call owns its inputs for its duration
//! and returns its output by value).
//!
//! Submodules, leaf first:
//!
//! - [`template`] enumerates every sequence-pair template.
//! - [`filter`] rejects templates that contradict a user constraint.
//! - [`packer`] turns an accepted template into a concrete packing.
//! - [`search`] drives the above three to find the best arrangement.
//! - [`model`] holds the shared data types.
//! - [`normalize`] converts between the relational and absolute-coordinate
//!   views at the boundary with the rest of the daemon.

pub mod error;
pub mod filter;
pub mod model;
pub mod normalize;
pub mod packer;
pub mod search;
pub mod template;

#[cfg(test)]
mod quickcheck_tests;

pub use error::Error;
pub use model::{Arrangement, Bounds, ConstraintMatrix, Direction, Pair, Size};

/// Computes the best arrangement for `sizes` under `constraints` within
/// `bounds`, or `Ok(None)` if no template yields a feasible packing.
///
/// # Errors
///
/// Returns [`Error`] for malformed input: zero displays, a non-positive
/// display size, a constraint matrix of the wrong dimension or not
/// symmetric under inversion, or inverted bounds. These are precondition
/// failures the caller is expected to validate against before calling;
/// "no layout" is a normal (non-error) result.
pub fn compute_layout(
    bounds: Bounds,
    sizes: &[Size],
    constraints: &ConstraintMatrix,
) -> Result<Option<Arrangement>, Error> {
    validate(bounds, sizes, constraints)?;
    Ok(search::search(bounds, sizes, constraints))
}

fn validate(bounds: Bounds, sizes: &[Size], constraints: &ConstraintMatrix) -> Result<(), Error> {
    if sizes.is_empty() {
        return Err(Error::NoDisplays(sizes.len()));
    }
    for (index, size) in sizes.iter().enumerate() {
        if size.width <= 0 || size.height <= 0 {
            return Err(Error::NonPositiveSize {
                index,
                width: size.width,
                height: size.height,
            });
        }
    }
    if constraints.n() != sizes.len() {
        return Err(Error::MatrixSizeMismatch {
            expected: sizes.len(),
            got: constraints.n(),
        });
    }
    if !constraints.is_symmetric() {
        return Err(Error::AsymmetricMatrix);
    }
    if bounds.w_min > bounds.w_max || bounds.h_min > bounds.h_max {
        return Err(Error::InvertedBounds {
            w_min: bounds.w_min,
            w_max: bounds.w_max,
            h_min: bounds.h_min,
            h_max: bounds.h_max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(w_max: i32, h_max: i32) -> Bounds {
        Bounds {
            w_min: 0,
            w_max,
            h_min: 0,
            h_max,
        }
    }

    #[test]
    fn rejects_empty_display_list() {
        let constraints = ConstraintMatrix::none(0);
        let result = compute_layout(bounds(4000, 2000), &[], &constraints);
        assert_eq!(result, Err(Error::NoDisplays(0)));
    }

    #[test]
    fn rejects_non_positive_size() {
        let sizes = [Size {
            width: 0,
            height: 1080,
        }];
        let constraints = ConstraintMatrix::none(1);
        let result = compute_layout(bounds(4000, 2000), &sizes, &constraints);
        assert!(matches!(result, Err(Error::NonPositiveSize { index: 0, .. })));
    }

    #[test]
    fn rejects_mismatched_matrix_size() {
        let sizes = [
            Size {
                width: 100,
                height: 100,
            },
            Size {
                width: 100,
                height: 100,
            },
        ];
        let constraints = ConstraintMatrix::none(1);
        let result = compute_layout(bounds(4000, 2000), &sizes, &constraints);
        assert_eq!(
            result,
            Err(Error::MatrixSizeMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn rejects_inverted_bounds() {
        let sizes = [Size {
            width: 100,
            height: 100,
        }];
        let constraints = ConstraintMatrix::none(1);
        let inverted = Bounds {
            w_min: 500,
            w_max: 100,
            h_min: 0,
            h_max: 100,
        };
        let result = compute_layout(inverted, &sizes, &constraints);
        assert!(matches!(result, Err(Error::InvertedBounds { .. })));
    }

    #[test]
    fn accepts_valid_single_display() {
        let sizes = [Size {
            width: 1920,
            height: 1080,
        }];
        let constraints = ConstraintMatrix::none(1);
        let result = compute_layout(bounds(4000, 2000), &sizes, &constraints).unwrap();
        let arrangement = result.unwrap();
        assert_eq!(arrangement.w, 1920);
        assert_eq!(arrangement.h, 1080);
    }
}

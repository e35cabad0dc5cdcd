//! The outer driver: iterates every template, applies the filter, invokes
//! the packer, and keeps the best-objective solution.

use super::filter;
use super::model::{Arrangement, Bounds, ConstraintMatrix, Pair, Size};
use super::packer::{self, Packing};
use super::template::SequencePair;

/// Exhaustively searches every sequence-pair template for the best
/// arrangement, or returns `None` if every template was either
/// filter-rejected or packer-infeasible.
///
/// Deterministic: identical inputs always walk the enumeration in the same
/// order and apply the same tie-break, so they always return the same
/// arrangement.
#[must_use]
pub fn search(bounds: Bounds, sizes: &[Size], constraints: &ConstraintMatrix) -> Option<Arrangement> {
    let n = sizes.len();
    if n == 0 {
        return None;
    }

    let mut template = SequencePair::identity(n);
    let mut best: Option<Packing> = None;

    loop {
        if filter::accepts(&template, constraints) {
            if let Some(candidate) = packer::pack(bounds, sizes, &template) {
                best = Some(better(best, candidate));
            }
        }

        if !template.advance() {
            break;
        }
    }

    best.map(|packing| Arrangement {
        w: packing.w,
        h: packing.h,
        positions: packing.positions,
    })
}

/// Picks the better of an existing best (if any) and a new candidate: lower
/// objective wins; ties broken by lexicographically smaller `(h, w)`.
fn better(current: Option<Packing>, candidate: Packing) -> Packing {
    match current {
        None => candidate,
        Some(current) => {
            let current_key = (current.o, current.h, current.w);
            let candidate_key = (candidate.o, candidate.h, candidate.w);
            if candidate_key < current_key {
                candidate
            } else {
                current
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::model::Direction;

    fn bounds(w_max: i32, h_max: i32) -> Bounds {
        Bounds {
            w_min: 0,
            w_max,
            h_min: 0,
            h_max,
        }
    }

    #[test]
    fn single_display_needs_no_constraints() {
        let sizes = [Size {
            width: 1920,
            height: 1080,
        }];
        let constraints = ConstraintMatrix::none(1);
        let arrangement = search(bounds(4000, 2000), &sizes, &constraints).unwrap();
        assert_eq!(arrangement.w, 1920);
        assert_eq!(arrangement.h, 1080);
        assert_eq!(arrangement.positions, vec![Pair::new(0, 0)]);
    }

    #[test]
    fn three_in_a_row() {
        let sizes = [
            Size {
                width: 1920,
                height: 1080,
            },
            Size {
                width: 1920,
                height: 1080,
            },
            Size {
                width: 1920,
                height: 1080,
            },
        ];
        let mut constraints = ConstraintMatrix::none(3);
        constraints.set(0, 1, Direction::Left);
        constraints.set(1, 2, Direction::Left);

        let arrangement = search(bounds(4000, 2000), &sizes, &constraints).unwrap();
        assert_eq!(arrangement.w, 5760);
        assert_eq!(arrangement.h, 1080);
        assert_eq!(
            arrangement.positions,
            vec![Pair::new(0, 0), Pair::new(1920, 0), Pair::new(3840, 0)]
        );
    }

    #[test]
    fn transitively_contradictory_constraints_have_no_layout() {
        // A sequence pair's "before" relation is transitive in both
        // permutations, so pinning 0 left-of 1 and 1 left-of 2 forces 0
        // left-of 2 under every template; asking for 0 above 2 as well
        // can never be satisfied, so every template is filter-rejected.
        let sizes = [
            Size {
                width: 1920,
                height: 1080,
            },
            Size {
                width: 1920,
                height: 1080,
            },
            Size {
                width: 1920,
                height: 1080,
            },
        ];
        let mut constraints = ConstraintMatrix::none(3);
        constraints.set(0, 1, Direction::Left);
        constraints.set(1, 2, Direction::Left);
        constraints.set(0, 2, Direction::Above);

        assert!(search(bounds(8000, 4000), &sizes, &constraints).is_none());
    }

    #[test]
    fn no_layout_when_combined_size_exceeds_bounds() {
        let sizes = [
            Size {
                width: 3000,
                height: 1080,
            },
            Size {
                width: 3000,
                height: 1080,
            },
        ];
        let constraints = ConstraintMatrix::none(2);
        assert!(search(bounds(4000, 2000), &sizes, &constraints).is_none());
    }

    #[test]
    fn determinism() {
        let sizes = [
            Size {
                width: 1920,
                height: 1080,
            },
            Size {
                width: 1280,
                height: 1024,
            },
        ];
        let constraints = ConstraintMatrix::none(2);
        let first = search(bounds(3000, 3000), &sizes, &constraints);
        let second = search(bounds(3000, 3000), &sizes, &constraints);
        assert_eq!(first, second);
    }
}

//! Conversions at the core's boundary between the relational model
//! (constraint matrix) and the absolute-coordinate model (positions).

use super::model::{Arrangement, ConstraintMatrix, Direction, Pair, Size};

/// Result of [`positions_to_constraints`] for a pair that can't be
/// expressed as a single directional relation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Unsupported;

/// Learns a constraint matrix from a backend-reported (or user-edited)
/// arrangement.
///
/// For every unordered pair, picks the axis with the larger separation
/// (ties broken X-before-Y) and assigns the corresponding direction. If a
/// pair overlaps on both axes -- the rectangles actually intersect -- the
/// whole arrangement is unsupported (overlap/mirror/clone) and the caller
/// should keep its previous state.
pub fn positions_to_constraints(
    sizes: &[Size],
    positions: &[Pair],
) -> Result<ConstraintMatrix, Unsupported> {
    let n = sizes.len();
    let mut constraints = ConstraintMatrix::none(n);

    for a in 0..n {
        for b in (a + 1)..n {
            let dir = pair_direction(sizes[a], positions[a], sizes[b], positions[b])?;
            constraints.set(a, b, dir);
        }
    }

    Ok(constraints)
}

/// Separation of `b` from `a` along an axis: positive means `a` ends before
/// `b` starts (gap in `a`'s favor), negative the reverse, by that many
/// pixels; `None` if they overlap on that axis.
fn axis_gap(a_start: i32, a_len: i32, b_start: i32, b_len: i32) -> Option<i32> {
    let a_end = a_start + a_len;
    let b_end = b_start + b_len;
    if a_end <= b_start {
        Some(b_start - a_end)
    } else if b_end <= a_start {
        Some(-(a_start - b_end))
    } else {
        None
    }
}

fn pair_direction(
    size_a: Size,
    pos_a: Pair,
    size_b: Size,
    pos_b: Pair,
) -> Result<Direction, Unsupported> {
    let x_gap = axis_gap(pos_a.x, size_a.width, pos_b.x, size_b.width);
    let y_gap = axis_gap(pos_a.y, size_a.height, pos_b.y, size_b.height);

    match (x_gap, y_gap) {
        (None, None) => Err(Unsupported),
        (Some(x), None) => Ok(if x >= 0 { Direction::Left } else { Direction::Right }),
        (None, Some(y)) => Ok(if y >= 0 { Direction::Above } else { Direction::Below }),
        (Some(x), Some(y)) => {
            // separated on both axes: prefer the larger absolute gap,
            // tie-break X before Y
            if x.abs() >= y.abs() {
                Ok(if x >= 0 { Direction::Left } else { Direction::Right })
            } else {
                Ok(if y >= 0 { Direction::Above } else { Direction::Below })
            }
        }
    }
}

/// Converts a solved packing into the form the backend expects: just the
/// virtual-screen size and per-display positions, unchanged. Mode,
/// rotation and primary-output selection are the collaborator's
/// responsibility, not this core's -- this function exists only to name
/// the boundary, not to transform anything.
#[must_use]
pub fn packing_to_backend(arrangement: &Arrangement) -> &Arrangement {
    arrangement
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_rectangles_are_unsupported() {
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
        let positions = [Pair::new(0, 0), Pair::new(50, 50)];
        assert_eq!(
            positions_to_constraints(&sizes, &positions),
            Err(Unsupported)
        );
    }

    #[test]
    fn one_pixel_gap_is_separated() {
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
        let positions = [Pair::new(0, 0), Pair::new(101, 0)];
        let constraints = positions_to_constraints(&sizes, &positions).unwrap();
        assert_eq!(constraints.get(0, 1), Direction::Left);
        assert_eq!(constraints.get(1, 0), Direction::Right);
    }

    #[test]
    fn equal_separation_prefers_x_axis() {
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
        // both axes separated by exactly 10px
        let positions = [Pair::new(0, 0), Pair::new(110, 110)];
        let constraints = positions_to_constraints(&sizes, &positions).unwrap();
        assert_eq!(constraints.get(0, 1), Direction::Left);
    }
}

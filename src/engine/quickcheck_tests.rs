//! Quickcheck based tests for the invariants in spec section 8. These
//! don't assert anything about which arrangement is chosen, only that
//! whatever `compute_layout` returns is a valid one -- or that it
//! legitimately found none.
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use super::{compute_layout, Bounds, ConstraintMatrix, Direction, Size};

const BOUNDS: Bounds = Bounds {
    w_min: 0,
    w_max: 20_000,
    h_min: 0,
    h_max: 20_000,
};

#[derive(Clone, Debug)]
struct Sizes(Vec<Size>);

impl Arbitrary for Sizes {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 1 + usize::arbitrary(g) % 4;
        let sizes = (0..n)
            .map(|_| Size {
                width: 1 + (u16::arbitrary(g) % 2000) as i32,
                height: 1 + (u16::arbitrary(g) % 2000) as i32,
            })
            .collect();
        Self(sizes)
    }
}

#[derive(Clone, Debug)]
struct Constraints(ConstraintMatrix);

impl Arbitrary for Constraints {
    fn arbitrary(g: &mut Gen) -> Self {
        // matched against an arbitrary `Sizes` of the same length by the
        // caller; generated independently here and resized by the
        // property, since quickcheck doesn't support correlated
        // generators directly.
        let n = 1 + usize::arbitrary(g) % 4;
        let mut matrix = ConstraintMatrix::none(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let dir = *g
                    .choose(&[
                        Direction::None,
                        Direction::Left,
                        Direction::Right,
                        Direction::Above,
                        Direction::Below,
                    ])
                    .unwrap();
                matrix.set(i, j, dir);
            }
        }
        Self(matrix)
    }
}

/// Resizes `matrix` to `n` by dropping rows/columns or filling new ones
/// with `none`, keeping it symmetric-under-inversion throughout.
fn fit_to(matrix: &ConstraintMatrix, n: usize) -> ConstraintMatrix {
    let mut fitted = ConstraintMatrix::none(n);
    for i in 0..n.min(matrix.n()) {
        for j in (i + 1)..n.min(matrix.n()) {
            fitted.set(i, j, matrix.get(i, j));
        }
    }
    fitted
}

#[quickcheck]
fn successful_solves_satisfy_core_invariants(sizes: Sizes, constraints: Constraints) -> bool {
    let sizes = sizes.0;
    let constraints = fit_to(&constraints.0, sizes.len());

    let Ok(Some(arrangement)) = compute_layout(BOUNDS, &sizes, &constraints) else {
        return true;
    };

    if arrangement.w > BOUNDS.w_max || arrangement.h > BOUNDS.h_max {
        return false;
    }

    for (k, pos) in arrangement.positions.iter().enumerate() {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        if pos.x + sizes[k].width > arrangement.w || pos.y + sizes[k].height > arrangement.h {
            return false;
        }
    }

    for a in 0..sizes.len() {
        for b in (a + 1)..sizes.len() {
            let (pa, pb) = (arrangement.positions[a], arrangement.positions[b]);
            let (sa, sb) = (sizes[a], sizes[b]);
            let separated = pa.x + sa.width <= pb.x
                || pb.x + sb.width <= pa.x
                || pa.y + sa.height <= pb.y
                || pb.y + sb.height <= pa.y;
            if !separated {
                return false;
            }
        }
    }

    true
}

#[quickcheck]
fn unconstrained_displays_always_fit_in_a_row(sizes: Sizes) -> bool {
    let sizes = sizes.0;
    let total_width: i32 = sizes.iter().map(|s| s.width).sum();
    let max_height = sizes.iter().map(|s| s.height).max().unwrap_or(0);
    if total_width > BOUNDS.w_max || max_height > BOUNDS.h_max {
        return true;
    }

    let constraints = ConstraintMatrix::none(sizes.len());
    matches!(compute_layout(BOUNDS, &sizes, &constraints), Ok(Some(_)))
}

#[quickcheck]
fn direction_inversion_is_involutive(dir: u8) -> bool {
    let dir = match dir % 5 {
        0 => Direction::None,
        1 => Direction::Left,
        2 => Direction::Right,
        3 => Direction::Above,
        _ => Direction::Below,
    };
    dir.inv().inv() == dir
}

#[quickcheck]
fn solving_is_deterministic(sizes: Sizes, constraints: Constraints) -> bool {
    let sizes = sizes.0;
    let constraints = fit_to(&constraints.0, sizes.len());

    let first = compute_layout(BOUNDS, &sizes, &constraints);
    let second = compute_layout(BOUNDS, &sizes, &constraints);

    match (first, second) {
        (Ok(a), Ok(b)) => a == b,
        (Err(_), Err(_)) => true,
        _ => false,
    }
}

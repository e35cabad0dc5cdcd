//! Given sizes, virtual-screen bounds and an accepted template, computes the
//! optimal integer packing for that template, or reports infeasibility.
//!
//! # Approach
//!
//! A general integer program would need an external solver; this crate has
//! none in its dependency stack and none of its siblings in the retrieval
//! pack pull one in either, so the packer is hand-rolled, exploiting the
//! structure spec.md §9 calls out explicitly: every constraint is
//! axis-aligned, and a sequence pair induces, for every pair of displays,
//! *either* a horizontal (left/right) *or* a vertical (above/below)
//! ordering -- never both. That means the X and Y coordinates never appear
//! together in an ordering inequality, and the whole problem separates into
//! two independent 1-D problems:
//!
//! - the **X problem**: positions and `W`, constrained by every
//!   horizontally-ordered pair (their gap terms) and every box bound, with
//!   an objective that also has to align the *Y* centers of
//!   vertically-ordered pairs (their `Mₚ` term lives on the orthogonal
//!   axis, which for a vertical pair is X);
//! - the **Y problem**, symmetric.
//!
//! Each 1-D problem is solved by computing the tightest feasible position
//! per display from the ordering constraints alone (a longest-path pass
//! over the induced partial order, identical in spirit to the
//! longest-common-subsequence placement pass used by classical
//! sequence-pair floorplanners), then, for displays with slack against
//! their own tightest bound, nudging them to align centers with
//! already-placed partners from the orthogonal-axis soft pairs -- a greedy
//! left-to-right sweep over the partial order, which is optimal whenever
//! the soft-alignment graph doesn't itself need a joint solve across more
//! than one already-fixed anchor (true for every scenario in spec.md §8;
//! see DESIGN.md for the general-case caveat).

use super::model::{Bounds, Pair, Size};
use super::template::SequencePair;

/// A concrete, feasible packing for one template: the objective value, the
/// virtual-screen size, and one position per display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Packing {
    pub o: i64,
    pub w: i32,
    pub h: i32,
    pub positions: Vec<Pair>,
}

/// Computes the optimal packing for `template`, or `None` if the combined
/// size of the displays can't fit inside `bounds` under this template's
/// topology.
#[must_use]
pub fn pack(bounds: Bounds, sizes: &[Size], template: &SequencePair) -> Option<Packing> {
    let n = sizes.len();

    let mut x_hard = Vec::new();
    let mut x_soft = Vec::new();
    let mut y_hard = Vec::new();
    let mut y_soft = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let dir = template.direction(i, j);
            if dir.is_horizontal() {
                if matches!(dir, super::model::Direction::Left) {
                    x_hard.push((i, j, sizes[i].width));
                } else {
                    x_hard.push((j, i, sizes[j].width));
                }
                y_soft.push((i, j));
            } else {
                if matches!(dir, super::model::Direction::Above) {
                    y_hard.push((i, j, sizes[i].height));
                } else {
                    y_hard.push((j, i, sizes[j].height));
                }
                x_soft.push((i, j));
            }
        }
    }

    let widths: Vec<i32> = sizes.iter().map(|s| s.width).collect();
    let heights: Vec<i32> = sizes.iter().map(|s| s.height).collect();

    let (xs, w, x_cost) = solve_axis(n, &widths, &x_hard, &x_soft, bounds.w_min, bounds.w_max)?;
    let (ys, h, y_cost) = solve_axis(n, &heights, &y_hard, &y_soft, bounds.h_min, bounds.h_max)?;

    let positions = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Pair::new(x, y))
        .collect();

    Some(Packing {
        o: x_cost + y_cost,
        w,
        h,
        positions,
    })
}

/// Solves one axis' sub-problem: positions plus the minimized virtual-screen
/// extent along this axis, plus the total cost this axis contributes to the
/// objective (gap terms from `hard` edges, alignment terms from `soft`
/// pairs). Returns `None` if the tightest packing already exceeds
/// `dim_max`.
fn solve_axis(
    n: usize,
    sizes: &[i32],
    hard: &[(usize, usize, i32)],
    soft: &[(usize, usize)],
    dim_min: i32,
    dim_max: i32,
) -> Option<(Vec<i32>, i32, i64)> {
    let mut floor = vec![0_i32; n];
    for _ in 0..n {
        for &(from, to, weight) in hard {
            let candidate = floor[from] + weight;
            if candidate > floor[to] {
                floor[to] = candidate;
            }
        }
    }

    let tight_dim = (0..n).map(|k| floor[k] + sizes[k]).max().unwrap_or(0);
    let dim = dim_min.max(tight_dim);
    if dim > dim_max {
        return None;
    }

    let mut ceil = (0..n).map(|k| dim - sizes[k]).collect::<Vec<_>>();
    for _ in 0..n {
        for &(from, to, weight) in hard {
            let candidate = ceil[to] - weight;
            if candidate < ceil[from] {
                ceil[from] = candidate;
            }
        }
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&k| (floor[k], k));

    let mut pos = vec![i32::MIN; n];
    for &k in &order {
        let eff_floor = hard
            .iter()
            .filter(|&&(_, to, _)| to == k)
            .map(|&(from, _, weight)| pos[from] + weight)
            .fold(0, i32::max);
        let upper = ceil[k].max(eff_floor);

        let mut targets: Vec<i32> = soft
            .iter()
            .filter_map(|&(a, b)| {
                let (me, other) = if a == k {
                    (a, b)
                } else if b == k {
                    (b, a)
                } else {
                    return None;
                };
                if pos[other] == i32::MIN {
                    return None;
                }
                Some(pos[other] + sizes[other] / 2 - sizes[me] / 2)
            })
            .collect();

        let chosen = if targets.is_empty() {
            eff_floor
        } else {
            targets.sort_unstable();
            let median = targets[targets.len() / 2];
            median.clamp(eff_floor, upper)
        };
        pos[k] = chosen;
    }

    let actual_dim = dim_min.max((0..n).map(|k| pos[k] + sizes[k]).max().unwrap_or(0));
    if actual_dim > dim_max {
        return None;
    }

    let gap_cost: i64 = hard
        .iter()
        .map(|&(from, to, weight)| i64::from(pos[to] - pos[from] - weight))
        .sum();
    let soft_cost: i64 = soft
        .iter()
        .map(|&(a, b)| {
            let center_a = pos[a] + sizes[a] / 2;
            let center_b = pos[b] + sizes[b] / 2;
            i64::from((center_a - center_b).abs())
        })
        .sum();

    Some((pos, actual_dim, gap_cost + soft_cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::model::Bounds;

    fn bounds(w_max: i32, h_max: i32) -> Bounds {
        Bounds {
            w_min: 0,
            w_max,
            h_min: 0,
            h_max,
        }
    }

    #[test]
    fn single_display_packs_at_origin() {
        let sizes = [Size {
            width: 1920,
            height: 1080,
        }];
        let template = SequencePair::identity(1);
        let packing = pack(bounds(4000, 2000), &sizes, &template).unwrap();
        assert_eq!(packing.w, 1920);
        assert_eq!(packing.h, 1080);
        assert_eq!(packing.positions, vec![Pair::new(0, 0)]);
        assert_eq!(packing.o, 0);
    }

    #[test]
    fn two_equal_displays_left_right() {
        let sizes = [
            Size {
                width: 1920,
                height: 1080,
            },
            Size {
                width: 1920,
                height: 1080,
            },
        ];
        let template = SequencePair::identity(2); // identity induces 0 left-of 1
        let packing = pack(bounds(4000, 2000), &sizes, &template).unwrap();
        assert_eq!(packing.w, 3840);
        assert_eq!(packing.h, 1080);
        assert_eq!(packing.positions, vec![Pair::new(0, 0), Pair::new(1920, 0)]);
    }

    #[test]
    fn mismatched_heights_align_centers() {
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
        let template = SequencePair::identity(2); // 0 left-of 1
        let packing = pack(bounds(4000, 2000), &sizes, &template).unwrap();
        assert_eq!(packing.w, 3200);
        assert_eq!(packing.h, 1080);
        assert_eq!(packing.positions[0], Pair::new(0, 0));
        assert_eq!(packing.positions[1], Pair::new(1920, 28));
    }

    #[test]
    fn infeasible_when_too_wide() {
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
        let template = SequencePair::identity(2);
        assert!(pack(bounds(4000, 2000), &sizes, &template).is_none());
    }
}

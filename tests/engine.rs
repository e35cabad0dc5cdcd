//! End-to-end scenarios for the layout engine, exercised through its one
//! public entry point rather than any individual submodule.

use layaway::engine::{compute_layout, Bounds, ConstraintMatrix, Direction, Pair, Size};

fn bounds(w_max: i32, h_max: i32) -> Bounds {
    Bounds {
        w_min: 0,
        w_max,
        h_min: 0,
        h_max,
    }
}

fn size(width: i32, height: i32) -> Size {
    Size { width, height }
}

#[test]
fn scenario_1_single_display() {
    let sizes = [size(1920, 1080)];
    let constraints = ConstraintMatrix::none(1);

    let arrangement = compute_layout(bounds(4000, 2000), &sizes, &constraints)
        .unwrap()
        .unwrap();

    assert_eq!(arrangement.w, 1920);
    assert_eq!(arrangement.h, 1080);
    assert_eq!(arrangement.positions, vec![Pair::new(0, 0)]);
}

#[test]
fn scenario_2_two_equal_displays_left_of() {
    let sizes = [size(1920, 1080), size(1920, 1080)];
    let mut constraints = ConstraintMatrix::none(2);
    constraints.set(0, 1, Direction::Left);

    let arrangement = compute_layout(bounds(4000, 2000), &sizes, &constraints)
        .unwrap()
        .unwrap();

    assert_eq!(arrangement.w, 3840);
    assert_eq!(arrangement.h, 1080);
    assert_eq!(
        arrangement.positions,
        vec![Pair::new(0, 0), Pair::new(1920, 0)]
    );
}

#[test]
fn scenario_3_mismatched_heights_center_align() {
    let sizes = [size(1920, 1080), size(1280, 1024)];
    let mut constraints = ConstraintMatrix::none(2);
    constraints.set(0, 1, Direction::Left);

    let arrangement = compute_layout(bounds(4000, 2000), &sizes, &constraints)
        .unwrap()
        .unwrap();

    assert_eq!(arrangement.w, 3200);
    assert_eq!(arrangement.h, 1080);
    assert_eq!(arrangement.positions[0], Pair::new(0, 0));
    assert_eq!(arrangement.positions[1], Pair::new(1920, 28));
}

#[test]
fn scenario_4_three_displays_chained_left_of() {
    let sizes = [size(1920, 1080), size(1920, 1080), size(1920, 1080)];
    let mut constraints = ConstraintMatrix::none(3);
    constraints.set(0, 1, Direction::Left);
    constraints.set(1, 2, Direction::Left);

    let arrangement = compute_layout(bounds(4000, 2000), &sizes, &constraints)
        .unwrap()
        .unwrap();

    assert_eq!(arrangement.w, 5760);
    assert_eq!(arrangement.h, 1080);
    assert_eq!(
        arrangement.positions,
        vec![Pair::new(0, 0), Pair::new(1920, 0), Pair::new(3840, 0)]
    );
}

#[test]
fn scenario_5_contradictory_constraints_have_no_layout() {
    let sizes = [size(1920, 1080), size(1920, 1080), size(1920, 1080)];
    let mut constraints = ConstraintMatrix::none(3);
    constraints.set(0, 1, Direction::Left);
    constraints.set(1, 2, Direction::Left);
    // sequence-pair transitivity forces 0 left-of 2 whenever 0 left-of 1
    // left-of 2; requiring 0 above 2 instead is unsatisfiable.
    constraints.set(0, 2, Direction::Above);

    let result = compute_layout(bounds(4000, 2000), &sizes, &constraints).unwrap();
    assert!(result.is_none());
}

#[test]
fn scenario_6_determinism() {
    let sizes = [size(1920, 1080), size(1280, 1024)];
    let constraints = ConstraintMatrix::none(2);

    let first = compute_layout(bounds(3000, 3000), &sizes, &constraints).unwrap();
    let second = compute_layout(bounds(3000, 3000), &sizes, &constraints).unwrap();

    assert_eq!(first, second);
}

#[test]
fn no_pair_of_displays_overlaps() {
    let sizes = [size(1920, 1080), size(1280, 1024), size(800, 600)];
    let constraints = ConstraintMatrix::none(3);

    let arrangement = compute_layout(bounds(4000, 3000), &sizes, &constraints)
        .unwrap()
        .unwrap();

    for a in 0..sizes.len() {
        for b in (a + 1)..sizes.len() {
            let (pa, pb) = (arrangement.positions[a], arrangement.positions[b]);
            let (sa, sb) = (sizes[a], sizes[b]);
            let x_sep = pa.x + sa.width <= pb.x || pb.x + sb.width <= pa.x;
            let y_sep = pa.y + sa.height <= pb.y || pb.y + sb.height <= pa.y;
            assert!(x_sep || y_sep, "displays {a} and {b} overlap");
        }
    }
}

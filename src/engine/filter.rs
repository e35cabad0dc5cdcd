//! Rejects templates whose induced topology contradicts a user constraint.
//!
//! Cheaper to run than the packer, so it sits in front of it and prunes the
//! `(n!)^2` enumeration down to whatever agrees with every pinned relation.

use super::{model::ConstraintMatrix, template::SequencePair};

/// Whether `template` agrees with every non-[`Direction::None`][super::model::Direction::None]
/// entry of `constraints`.
///
/// Accepts iff for every unordered pair `(a, b)` with `a < b`:
/// `constraints[a][b] == None` or `constraints[a][b] == template.direction(a, b)`.
#[must_use]
pub fn accepts(template: &SequencePair, constraints: &ConstraintMatrix) -> bool {
    let n = template.n();
    (0..n).all(|a| {
        (a + 1..n).all(|b| {
            let wanted = constraints.get(a, b);
            wanted.is_none() || wanted == template.direction(a, b)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::model::Direction;

    #[test]
    fn all_none_accepts_everything() {
        let template = SequencePair::identity(3);
        let constraints = ConstraintMatrix::none(3);
        assert!(accepts(&template, &constraints));
    }

    #[test]
    fn matching_constraint_accepts() {
        let template = SequencePair::identity(2); // induces 0 left-of 1
        let mut constraints = ConstraintMatrix::none(2);
        constraints.set(0, 1, Direction::Left);
        assert!(accepts(&template, &constraints));
    }

    #[test]
    fn contradicting_constraint_rejects() {
        let template = SequencePair::identity(2); // induces 0 left-of 1
        let mut constraints = ConstraintMatrix::none(2);
        constraints.set(0, 1, Direction::Above);
        assert!(!accepts(&template, &constraints));
    }
}

//! Enumerates every sequence-pair template for `n` displays.
//!
//! A sequence pair is a pair of permutations of `0..n`; iterating every
//! `(n!)^2` pair is a complete, if superexponential, enumeration of
//! non-overlapping rectangle packings (see the module docs of
//! [`crate::engine`] for why that's an acceptable trade at small `n`).

use super::model::Direction;

/// Two permutations of `{0..n}` encoding a packing topology.
#[derive(Clone, Debug)]
pub struct SequencePair {
    n: usize,
    a: Vec<usize>,
    b: Vec<usize>,
    // inverse permutations, kept in sync with `a`/`b` so `direction` is O(1)
    // instead of scanning for each query.
    pos_a: Vec<usize>,
    pos_b: Vec<usize>,
}

impl SequencePair {
    /// The first template in enumeration order: both permutations at the
    /// identity.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let a: Vec<usize> = (0..n).collect();
        let b = a.clone();
        let pos_a = a.clone();
        let pos_b = b.clone();
        Self {
            n,
            a,
            b,
            pos_a,
            pos_b,
        }
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Direction induced between displays `i` and `j`, `i != j`. Never
    /// [`Direction::None`] -- see the table in the crate-level docs.
    #[must_use]
    pub fn direction(&self, i: usize, j: usize) -> Direction {
        let da = self.pos_a[j] as i64 - self.pos_a[i] as i64;
        let db = self.pos_b[j] as i64 - self.pos_b[i] as i64;
        match (da > 0, db > 0) {
            (true, true) => Direction::Left,
            (true, false) => Direction::Above,
            (false, true) => Direction::Below,
            (false, false) => Direction::Right,
        }
    }

    /// Advances `a` to its next lexicographic permutation; if `a` wraps
    /// around, advances `b` instead. Returns `false` exactly when both have
    /// wrapped, i.e. all `(n!)^2` templates have been produced.
    pub fn advance(&mut self) -> bool {
        if next_permutation(&mut self.a) {
            reindex(&self.a, &mut self.pos_a);
            return true;
        }
        reindex(&self.a, &mut self.pos_a);
        let advanced = next_permutation(&mut self.b);
        reindex(&self.b, &mut self.pos_b);
        advanced
    }
}

fn reindex(perm: &[usize], pos: &mut [usize]) {
    for (idx, &value) in perm.iter().enumerate() {
        pos[value] = idx;
    }
}

/// Standard next-lexicographic-permutation algorithm over `0..n`. Returns
/// `false` and resets `perm` to the identity (ascending) order when `perm`
/// was already the lexicographically last permutation.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }

    if i == 0 {
        perm.sort_unstable();
        return false;
    }

    let pivot = i - 1;
    let mut j = perm.len() - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }
    perm.swap(pivot, j);
    perm[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial(n: usize) -> usize {
        (1..=n).product::<usize>().max(1)
    }

    #[test]
    fn enumerates_exactly_n_factorial_squared_templates() {
        for n in 1..=4 {
            let mut template = SequencePair::identity(n);
            let mut count = 1;
            while template.advance() {
                count += 1;
            }
            assert_eq!(count, factorial(n) * factorial(n), "n = {n}");
        }
    }

    #[test]
    fn identity_induces_all_left() {
        let template = SequencePair::identity(3);
        assert_eq!(template.direction(0, 1), Direction::Left);
        assert_eq!(template.direction(1, 2), Direction::Left);
        assert_eq!(template.direction(0, 2), Direction::Left);
        assert_eq!(template.direction(1, 0), Direction::Right);
    }

    #[test]
    fn swapped_b_induces_above_below() {
        // a = [0, 1], b = [1, 0]: 0 precedes 1 in a but follows in b -> above.
        let template = SequencePair {
            n: 2,
            a: vec![0, 1],
            b: vec![1, 0],
            pos_a: vec![0, 1],
            pos_b: vec![1, 0],
        };
        assert_eq!(template.direction(0, 1), Direction::Above);
        assert_eq!(template.direction(1, 0), Direction::Below);
    }
}

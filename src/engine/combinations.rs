//! Lazy k-of-n combination generator.
//!
//! Yields every ascending `k`-subset of `0..n` in lexicographic order:
//!
//! ```
//! use trigo::engine::Combinations;
//!
//! let combos: Vec<Vec<usize>> = Combinations::new(4, 3).map(|c| c.to_vec()).collect();
//! assert_eq!(
//!     combos,
//!     vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
//! );
//! ```

use smallvec::SmallVec;

/// Slot indices of one candidate group.
///
/// Match sizes are typically 3-4, so these stay inline.
pub type Candidate = SmallVec<[usize; 4]>;

/// Iterator over the `k`-combinations of `0..n`.
///
/// Yields nothing when `k == 0` or `k > n`. Restart by constructing a new one.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Candidate,
    done: bool,
}

impl Combinations {
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }

    /// Advance `indices` to the next combination; false when exhausted.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still move up.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        self.done = !self.advance();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: usize, k: usize) -> u64 {
        if k > n {
            return 0;
        }
        let k = k.min(n - k);
        // acc * (n - i) / (i + 1) stays integral at every step
        (0..k).fold(1u64, |acc, i| acc * (n - i) as u64 / (i as u64 + 1))
    }

    #[test]
    fn test_three_of_five() {
        let combos: Vec<Vec<usize>> = Combinations::new(5, 3).map(|c| c.to_vec()).collect();
        assert_eq!(combos.len(), 10);
        assert_eq!(combos.first(), Some(&vec![0, 1, 2]));
        assert_eq!(combos.last(), Some(&vec![2, 3, 4]));

        // Strictly ascending within and lexicographic across
        for c in &combos {
            assert!(c.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(combos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_counts_match_binomial() {
        for n in 0..10 {
            for k in 1..=n {
                assert_eq!(Combinations::new(n, k).count() as u64, binomial(n, k), "C({n}, {k})");
            }
        }
    }

    #[test]
    fn test_standard_field() {
        assert_eq!(Combinations::new(12, 3).count(), 220);
        assert_eq!(Combinations::new(15, 3).count(), 455);
    }

    #[test]
    fn test_k_equals_n() {
        let combos: Vec<Vec<usize>> = Combinations::new(3, 3).map(|c| c.to_vec()).collect();
        assert_eq!(combos, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(Combinations::new(2, 3).count(), 0);
        assert_eq!(Combinations::new(5, 0).count(), 0);
        assert_eq!(Combinations::new(0, 1).count(), 0);
    }

    #[test]
    fn test_restartable() {
        let first: Vec<_> = Combinations::new(6, 2).collect();
        let second: Vec<_> = Combinations::new(6, 2).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(12, 3), 220);
        assert_eq!(binomial(81, 3), 85320);
        assert_eq!(binomial(3, 5), 0);
        assert_eq!(binomial(7, 0), 1);
    }
}

//! Lexicographic enumeration of input-feature index tuples.
//!
//! Each observable function of arity `k` is evaluated once per index
//! tuple of length `k` over `0..n_features`. Two modes decide which
//! tuples exist:
//!
//! - [`CombinationMode::Distinct`]: strictly increasing tuples, no index
//!   repeated (`C(n, k)` tuples).
//! - [`CombinationMode::WithReplacement`]: non-decreasing tuples, indices
//!   may repeat (`C(n + k - 1, k)` tuples).
//!
//! Tuples are always yielded in lexicographic order. Fitting, transforming
//! and naming all depend on that order agreeing.

use smallvec::SmallVec;

/// One index tuple selecting the input columns passed to a function.
pub type Combination = SmallVec<[usize; 4]>;

/// Which index tuples a function is evaluated over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CombinationMode {
    /// No index reuse within a tuple ("interaction only").
    #[default]
    Distinct,
    /// Indices may repeat within a tuple.
    WithReplacement,
}

impl From<bool> for CombinationMode {
    /// Map an `interaction_only` flag to a mode.
    fn from(interaction_only: bool) -> Self {
        if interaction_only {
            CombinationMode::Distinct
        } else {
            CombinationMode::WithReplacement
        }
    }
}

/// Lazy iterator over index tuples in lexicographic order.
///
/// Created by [`combinations`].
#[derive(Clone, Debug)]
pub struct Combinations {
    n_features: usize,
    mode: CombinationMode,
    next: Option<Combination>,
}

/// Enumerate every index tuple of length `arity` over `0..n_features`.
///
/// Yields nothing when no tuple exists: `arity > n_features` in
/// `Distinct` mode, or `n_features == 0` with a positive arity. An arity
/// of zero yields the single empty tuple.
///
/// # Examples
///
/// ```
/// use koop_obs::{combinations, CombinationMode};
///
/// let distinct: Vec<Vec<usize>> = combinations(3, 2, CombinationMode::Distinct)
///     .map(|c| c.to_vec())
///     .collect();
/// assert_eq!(distinct, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
///
/// let repeated = combinations(2, 2, CombinationMode::WithReplacement).count();
/// assert_eq!(repeated, 3); // (0,0), (0,1), (1,1)
/// ```
pub fn combinations(n_features: usize, arity: usize, mode: CombinationMode) -> Combinations {
    let first = match mode {
        CombinationMode::Distinct if arity <= n_features => Some((0..arity).collect()),
        CombinationMode::WithReplacement if arity == 0 || n_features > 0 => {
            Some(SmallVec::from_elem(0, arity))
        }
        _ => None,
    };
    Combinations {
        n_features,
        mode,
        next: first,
    }
}

impl Combinations {
    /// Largest value position `i` may hold in a valid tuple.
    fn ceiling(&self, i: usize, arity: usize) -> usize {
        match self.mode {
            CombinationMode::Distinct => self.n_features - arity + i,
            CombinationMode::WithReplacement => self.n_features - 1,
        }
    }

    fn successor(&self, current: &Combination) -> Option<Combination> {
        let arity = current.len();
        let pivot = (0..arity)
            .rev()
            .find(|&i| current[i] < self.ceiling(i, arity))?;
        let mut next = current.clone();
        next[pivot] += 1;
        for i in pivot + 1..arity {
            next[i] = match self.mode {
                CombinationMode::Distinct => next[i - 1] + 1,
                CombinationMode::WithReplacement => next[i - 1],
            };
        }
        Some(next)
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let current = self.next.take()?;
        self.next = self.successor(&current);
        Some(current)
    }
}

/// Number of tuples [`combinations`] yields, in closed form.
///
/// `C(n, k)` for `Distinct`, `C(n + k - 1, k)` for `WithReplacement`.
/// Returns `None` if the count does not fit in a `usize`.
pub fn combination_count(n_features: usize, arity: usize, mode: CombinationMode) -> Option<usize> {
    match mode {
        CombinationMode::Distinct => binomial(n_features, arity),
        CombinationMode::WithReplacement => {
            if arity == 0 {
                Some(1)
            } else if n_features == 0 {
                Some(0)
            } else {
                binomial(n_features.checked_add(arity - 1)?, arity)
            }
        }
    }
}

fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    // Partial products are C(n, i + 1), non-decreasing for i < n / 2, so
    // once one leaves usize the result does too. The u128 widening keeps
    // the product before the exact division from overflowing.
    (0..k).try_fold(1usize, |acc, i| {
        let wide = acc as u128 * (n - i) as u128 / (i + 1) as u128;
        usize::try_from(wide).ok()
    })
}

//! Pareto dominance under minimization.

use std::cmp::Ordering;

/// Outcome of comparing two coordinate vectors for dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (incomparable or identical).
    Neither,
}

/// Compares two coordinate vectors for Pareto dominance (minimization).
///
/// # Example
///
/// ```
/// use u_skyline::skyline::{dominance_cmp, Dominance};
///
/// assert_eq!(dominance_cmp(&[2.0, 3.0], &[4.0, 4.0]), Dominance::Left);
/// assert_eq!(dominance_cmp(&[1.0, 5.0], &[3.0, 1.0]), Dominance::Neither);
/// assert_eq!(dominance_cmp(&[2.0, 2.0], &[2.0, 2.0]), Dominance::Neither);
/// ```
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Lexicographic order over coordinate vectors: dimension 0 first, ties
/// broken by dimension 1, then 2, and so on.
///
/// `-0.0` and `0.0` compare equal, matching [`dominance_cmp`].
pub fn lexicographic_cmp(a: &[f64], b: &[f64]) -> Ordering {
    for (va, vb) in a.iter().zip(b.iter()) {
        // adding 0.0 folds -0.0 into 0.0
        match (va + 0.0).total_cmp(&(vb + 0.0)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

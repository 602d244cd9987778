//! Position of a given point in a directional ranking.

use crate::error::Result;
use crate::point::{Point, PointSet};
use crate::ranking::{directional_top_k, Weights};

/// 1-based rank of `target` among `points` under `weights` and `beta`.
///
/// The ranking is probed with k = 10, 100, 1000, ... (capped at the number
/// of points) until `target` shows up, so only a prefix of the ranking is
/// materialized. Points are matched by coordinates. Returns `None` if
/// `target` is not in `points`. With tied scores the rank reflects
/// whichever order the bounded queue produced.
///
/// # Errors
///
/// Propagates the validation errors of [`directional_top_k`].
///
/// # Example
///
/// ```
/// use u_skyline::evaluation::rank_of;
/// use u_skyline::point::{Point, PointSet};
/// use u_skyline::ranking::Weights;
///
/// let points = PointSet::new(
///     (0..30).map(|i| Point::new(i, vec![i as f64 / 30.0, 0.5])).collect(),
/// )
/// .unwrap();
/// let weights = Weights::new(vec![0.5, 0.5]).unwrap();
///
/// let rank = rank_of(&points, &points.points()[14], &weights, 1.0).unwrap();
/// assert_eq!(rank, Some(15));
/// ```
pub fn rank_of(
    points: &PointSet,
    target: &Point,
    weights: &Weights,
    beta: f64,
) -> Result<Option<usize>> {
    let n = points.len();
    if n == 0 {
        directional_top_k(points, 0, weights, beta)?;
        return Ok(None);
    }

    let mut k = 1usize;
    loop {
        k = k.saturating_mul(10).min(n);
        let ranked = directional_top_k(points, k, weights, beta)?;
        if let Some(position) = ranked.iter().position(|p| p == target) {
            log::trace!("rank {} found with k = {k}", position + 1);
            return Ok(Some(position + 1));
        }
        if k == n {
            return Ok(None);
        }
    }
}

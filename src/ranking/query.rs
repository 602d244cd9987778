//! Top-k and nearest-to-direction queries.

use super::scorer::{check_beta, DirectionalScorer, LinearScorer, ScoringRule};
use super::weights::Weights;
use crate::error::Result;
use crate::heap::BoundedQueue;
use crate::point::{Point, PointSet};

/// A point's score and its position in the input.
#[derive(Debug, Clone, Copy)]
struct Ranked {
    score: f64,
    index: usize,
}

fn ranks_ahead(a: &Ranked, b: &Ranked) -> bool {
    a.score < b.score
}

/// The `k` points with the lowest score under `rule`, best first.
///
/// Scores are computed once per point and fed through a
/// [`BoundedQueue`], so the input is never fully sorted. Points with
/// equal scores may appear in any relative order.
pub fn top_k_by<R: ScoringRule + ?Sized>(points: &PointSet, k: usize, rule: &R) -> Vec<Point> {
    let mut queue = BoundedQueue::new(k, ranks_ahead);
    for (index, point) in points.iter().enumerate() {
        let candidate = Ranked {
            score: rule.score(point),
            index,
        };
        queue.offer(candidate);
    }
    let all = points.points();
    queue
        .into_sorted_vec()
        .into_iter()
        .map(|r| all[r.index].clone())
        .collect()
}

/// The `k` points with the lowest linear utility `sum_i w_i * p_i`.
///
/// # Errors
///
/// [`SkylineError::InvalidInput`](crate::SkylineError::InvalidInput) if
/// `points` is non-empty and `weights` does not match its dimensionality.
///
/// # Example
///
/// ```
/// use u_skyline::point::{Point, PointSet};
/// use u_skyline::ranking::{top_k, Weights};
///
/// let points = PointSet::new(vec![
///     Point::new(1, vec![1.0, 5.0]),
///     Point::new(2, vec![2.0, 3.0]),
///     Point::new(3, vec![3.0, 1.0]),
///     Point::new(4, vec![4.0, 4.0]),
/// ])
/// .unwrap();
/// let weights = Weights::new(vec![0.5, 0.5]).unwrap();
///
/// let best = top_k(&points, 2, &weights).unwrap();
/// let ids: Vec<u64> = best.iter().map(|p| p.id()).collect();
/// assert_eq!(ids, vec![3, 2]);
/// ```
pub fn top_k(points: &PointSet, k: usize, weights: &Weights) -> Result<Vec<Point>> {
    if points.is_empty() {
        return Ok(Vec::new());
    }
    weights.check_dimensions(points.dimensions())?;
    Ok(top_k_by(points, k, &LinearScorer::new(weights.clone())))
}

/// The `k` points with the lowest directional score (see
/// [`DirectionalScorer`]).
///
/// `beta == 1` is answered by [`top_k`] directly and returns exactly its
/// result.
///
/// # Errors
///
/// [`SkylineError::InvalidInput`](crate::SkylineError::InvalidInput) if
/// `beta` is outside `[0, 1]` or the weights do not match the points'
/// dimensionality.
pub fn directional_top_k(
    points: &PointSet,
    k: usize,
    weights: &Weights,
    beta: f64,
) -> Result<Vec<Point>> {
    check_beta(beta)?;
    if beta == 1.0 {
        return top_k(points, k, weights);
    }
    if points.is_empty() {
        return Ok(Vec::new());
    }
    weights.check_dimensions(points.dimensions())?;
    let scorer = DirectionalScorer::new(weights.clone(), beta)?;
    Ok(top_k_by(points, k, &scorer))
}

/// The point closest to the preference line derived from `weights`.
///
/// Only the distance `l(p)` matters; linear utility is ignored. On ties
/// the earliest point wins. Returns `None` for an empty set.
///
/// # Errors
///
/// [`SkylineError::InvalidInput`](crate::SkylineError::InvalidInput) if
/// the weights do not match the points' dimensionality.
pub fn nearest_to_direction(points: &PointSet, weights: &Weights) -> Result<Option<Point>> {
    if points.is_empty() {
        return Ok(None);
    }
    weights.check_dimensions(points.dimensions())?;
    let scorer = DirectionalScorer::new(weights.clone(), 0.0)?;

    let mut nearest: Option<(&Point, f64)> = None;
    for point in points {
        let distance = scorer.distance_from_line(point.values());
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((point, distance)),
        }
    }
    Ok(nearest.map(|(p, _)| p.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkylineError;
    use crate::point::PointId;
    use proptest::prelude::*;

    fn scenario() -> PointSet {
        PointSet::new(vec![
            Point::new(1, vec![1.0, 5.0]),
            Point::new(2, vec![2.0, 3.0]),
            Point::new(3, vec![3.0, 1.0]),
            Point::new(4, vec![4.0, 4.0]),
        ])
        .unwrap()
    }

    fn w(values: &[f64]) -> Weights {
        Weights::new(values.to_vec()).unwrap()
    }

    fn ids(points: &[Point]) -> Vec<PointId> {
        points.iter().map(Point::id).collect()
    }

    #[test]
    fn test_top_k_linear() {
        let best = top_k(&scenario(), 2, &w(&[0.5, 0.5])).unwrap();
        assert_eq!(ids(&best), vec![3, 2]);
        assert_eq!(best[0].values(), &[3.0, 1.0]);
    }

    #[test]
    fn test_directional_beta_one_is_linear() {
        let points = scenario();
        let weights = w(&[0.5, 0.5]);
        let linear = top_k(&points, 2, &weights).unwrap();
        let directional = directional_top_k(&points, 2, &weights, 1.0).unwrap();
        assert_eq!(ids(&linear), ids(&directional));
    }

    #[test]
    fn test_single_point() {
        let points = PointSet::new(vec![Point::new(1, vec![7.0, 7.0])]).unwrap();
        for k in 1..4 {
            let best = top_k(&points, k, &w(&[0.3, 0.7])).unwrap();
            assert_eq!(ids(&best), vec![1]);
        }
    }

    #[test]
    fn test_k_zero() {
        assert!(top_k(&scenario(), 0, &w(&[0.5, 0.5])).unwrap().is_empty());
        assert!(directional_top_k(&scenario(), 0, &w(&[0.5, 0.5]), 0.5)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_points() {
        let empty = PointSet::empty();
        let weights = w(&[0.5, 0.5]);
        assert!(top_k(&empty, 3, &weights).unwrap().is_empty());
        assert!(directional_top_k(&empty, 3, &weights, 0.5)
            .unwrap()
            .is_empty());
        assert!(nearest_to_direction(&empty, &weights).unwrap().is_none());
    }

    #[test]
    fn test_dimension_mismatch() {
        let weights = w(&[0.2, 0.3, 0.5]);
        assert!(matches!(
            top_k(&scenario(), 2, &weights),
            Err(SkylineError::InvalidInput(_))
        ));
        assert!(matches!(
            directional_top_k(&scenario(), 2, &weights, 0.5),
            Err(SkylineError::InvalidInput(_))
        ));
        assert!(matches!(
            nearest_to_direction(&scenario(), &weights),
            Err(SkylineError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_directional_rejects_bad_beta() {
        assert!(directional_top_k(&scenario(), 2, &w(&[0.5, 0.5]), 1.01).is_err());
    }

    #[test]
    fn test_directional_beta_zero_prefers_line() {
        let points = PointSet::new(vec![
            Point::new(1, vec![0.1, 0.9]),
            Point::new(2, vec![0.5, 0.5]),
            Point::new(3, vec![0.9, 0.1]),
        ])
        .unwrap();
        let best = directional_top_k(&points, 1, &w(&[0.5, 0.5]), 0.0).unwrap();
        assert_eq!(ids(&best), vec![2]);
    }

    #[test]
    fn test_nearest_to_direction() {
        let points = PointSet::new(vec![
            Point::new(1, vec![0.1, 0.9]),
            Point::new(2, vec![0.4, 0.5]),
            Point::new(3, vec![0.9, 0.1]),
        ])
        .unwrap();
        let nearest = nearest_to_direction(&points, &w(&[0.5, 0.5])).unwrap().unwrap();
        assert_eq!(nearest.id(), 2);

        // w = (1, 0) -> line along the second axis: smallest first coordinate
        let nearest = nearest_to_direction(&points, &w(&[1.0, 0.0])).unwrap().unwrap();
        assert_eq!(nearest.id(), 1);
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let points = PointSet::new(vec![
            Point::new(1, vec![0.2, 0.2]),
            Point::new(2, vec![0.6, 0.6]),
        ])
        .unwrap();
        let nearest = nearest_to_direction(&points, &w(&[0.5, 0.5])).unwrap().unwrap();
        assert_eq!(nearest.id(), 1);
    }

    #[test]
    fn test_top_k_by_custom_rule() {
        struct BySum;
        impl ScoringRule for BySum {
            fn name(&self) -> &str {
                "BySum"
            }
            fn score(&self, point: &Point) -> f64 {
                point.sum()
            }
        }
        let best = top_k_by(&scenario(), 3, &BySum);
        assert_eq!(ids(&best), vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_may_come_in_any_order() {
        // (1, 3) and (3, 1) tie under equal weights; either may rank first.
        let points = PointSet::new(vec![
            Point::new(1, vec![1.0, 3.0]),
            Point::new(2, vec![3.0, 1.0]),
            Point::new(3, vec![5.0, 5.0]),
        ])
        .unwrap();
        let best = top_k(&points, 2, &w(&[0.5, 0.5])).unwrap();
        let mut got = ids(&best);
        got.sort_unstable();
        assert_eq!(got, vec![1, 2]);
    }

    // ---- Properties ----

    fn dataset() -> impl Strategy<Value = (PointSet, Weights)> {
        (1usize..=4).prop_flat_map(|d| {
            let points = prop::collection::vec(prop::collection::vec(0.0f64..1.0, d), 0..30)
                .prop_map(|rows| {
                    let points = rows
                        .into_iter()
                        .enumerate()
                        .map(|(i, r)| Point::new(i as PointId + 1, r))
                        .collect();
                    PointSet::new(points).unwrap()
                });
            let weights = prop::collection::vec(0.0f64..1.0, d)
                .prop_filter("at least one positive weight", |w| w.iter().any(|&x| x > 0.0))
                .prop_map(|w| Weights::new(w).unwrap());
            (points, weights)
        })
    }

    proptest! {
        #[test]
        fn prop_beta_one_equals_linear(
            (points, weights) in dataset(),
            k in 0usize..10,
        ) {
            let linear = top_k(&points, k, &weights).unwrap();
            let directional = directional_top_k(&points, k, &weights, 1.0).unwrap();
            prop_assert_eq!(ids(&linear), ids(&directional));
        }

        #[test]
        fn prop_large_k_returns_all_sorted(
            (points, weights) in dataset(),
            beta in 0.0f64..=1.0,
            extra in 0usize..5,
        ) {
            let k = points.len() + extra;
            let result = directional_top_k(&points, k, &weights, beta).unwrap();
            prop_assert_eq!(result.len(), points.len());

            let scorer = DirectionalScorer::new(weights.clone(), beta).unwrap();
            let scores: Vec<f64> = result.iter().map(|p| scorer.score(p)).collect();
            for pair in scores.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        #[test]
        fn prop_top_k_beats_the_rest(
            (points, weights) in dataset(),
            beta in 0.0f64..1.0,
            k in 0usize..10,
        ) {
            let result = directional_top_k(&points, k, &weights, beta).unwrap();
            prop_assert_eq!(result.len(), k.min(points.len()));

            let scorer = DirectionalScorer::new(weights.clone(), beta).unwrap();
            let kept: Vec<PointId> = ids(&result);
            let worst_kept = result
                .iter()
                .map(|p| scorer.score(p))
                .fold(f64::NEG_INFINITY, f64::max);
            for p in points.iter().filter(|p| !kept.contains(&p.id())) {
                prop_assert!(scorer.score(p) >= worst_kept);
            }
        }
    }
}

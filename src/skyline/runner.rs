//! Sort-then-scan skyline computation.

use super::dominance::lexicographic_cmp;
use crate::point::{Point, PointSet};
use std::time::{Duration, Instant};

/// Result of a skyline computation.
#[derive(Debug, Clone)]
pub struct SkylineResult {
    /// The Pareto-optimal subset, in lexicographic order.
    pub skyline: PointSet,

    /// Number of pairwise dominance tests performed.
    pub comparisons: u64,

    /// Wall-clock duration of the computation.
    pub elapsed: Duration,
}

/// Computes skylines with a sort-filter-skyline scan.
///
/// # Algorithm
///
/// 1. Sort the input lexicographically (dimension 0, then 1, ...)
/// 2. Scan once, keeping a window of provisional skyline points
/// 3. A point dominated by any window point is discarded; otherwise it
///    joins the window
///
/// After the sort no later point can dominate an earlier one, so the
/// window never needs pruning and is the skyline once the scan ends.
///
/// # Complexity
///
/// O(n log n + n * s) where s is the skyline size.
pub struct SkylineRunner;

impl SkylineRunner {
    /// Computes the skyline of `points`. The input is not modified.
    pub fn run(points: &PointSet) -> SkylineResult {
        let start = Instant::now();

        let mut sorted: Vec<&Point> = points.iter().collect();
        sorted.sort_by(|a, b| lexicographic_cmp(a.values(), b.values()));

        let mut window: Vec<Point> = Vec::new();
        let mut comparisons = 0u64;

        'candidates: for &candidate in &sorted {
            for kept in &window {
                comparisons += 1;
                if kept.dominates(candidate) {
                    continue 'candidates;
                }
            }
            window.push(candidate.clone());
        }

        let elapsed = start.elapsed();
        log::debug!(
            "skyline: {} of {} points, {} comparisons in {:?}",
            window.len(),
            points.len(),
            comparisons,
            elapsed
        );

        SkylineResult {
            // window members come from a single `PointSet`
            skyline: PointSet::from_vec_unchecked(window),
            comparisons,
            elapsed,
        }
    }
}

/// Pareto-optimal subset of `points` under minimization.
///
/// # Example
///
/// ```
/// use u_skyline::point::{Point, PointSet};
/// use u_skyline::skyline::skyline;
///
/// let points = PointSet::new(vec![
///     Point::new(1, vec![1.0, 5.0]),
///     Point::new(2, vec![2.0, 3.0]),
///     Point::new(3, vec![3.0, 1.0]),
///     Point::new(4, vec![4.0, 4.0]), // dominated by (2, 3)
/// ])
/// .unwrap();
///
/// let sky = skyline(&points);
/// let ids: Vec<u64> = sky.iter().map(|p| p.id()).collect();
/// assert_eq!(ids, vec![1, 2, 3]);
/// ```
pub fn skyline(points: &PointSet) -> PointSet {
    SkylineRunner::run(points).skyline
}

//! Exclusive dominance volume.
//!
//! The fraction of the unit hypercube `[0, 1]^d` dominated by exactly one
//! skyline point, attributed to that point. Coordinates are assumed to be
//! normalized to `[0, 1]`.

use super::map::IndicatorMap;
use crate::point::{Point, PointSet};
use crate::skyline::{dominance_cmp, Dominance};
use rand::Rng;

/// Exact exclusive areas for a 2-D skyline.
///
/// With points sorted by the first coordinate (the second coordinate
/// then decreases), point i exclusively dominates the rectangle
/// `[x_i, x_{i+1}) x [y_i, y_{i-1})`, where `x_{n} = 1` and `y_{-1} = 1`.
pub(crate) fn sweep_2d(skyline: &PointSet) -> IndicatorMap {
    let mut sorted: Vec<&Point> = skyline.iter().collect();
    sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));

    let mut map = IndicatorMap::new();
    for (i, point) in sorted.iter().enumerate() {
        let x_next = sorted.get(i + 1).map_or(1.0, |p| p[0]);
        let y_prev = if i == 0 { 1.0 } else { sorted[i - 1][1] };
        map.set(point, (x_next - point[0]) * (y_prev - point[1]));
    }
    map
}

/// Monte Carlo estimate of exclusive volume in any dimensionality.
///
/// Each of `samples` uniform points in `[0, 1)^d` that is dominated by
/// exactly one skyline point adds `1 / samples` to that point. Every
/// skyline point appears in the result, possibly with 0.
pub(crate) fn monte_carlo<R: Rng>(skyline: &PointSet, samples: usize, rng: &mut R) -> IndicatorMap {
    let d = skyline.dimensions();
    let mut map = IndicatorMap::new();
    for p in skyline {
        map.set_if_absent(p, 0.0);
    }
    if samples == 0 {
        return map;
    }

    let increment = 1.0 / samples as f64;
    let mut sample = vec![0.0; d];
    for _ in 0..samples {
        for v in sample.iter_mut() {
            *v = rng.random::<f64>();
        }

        let mut owner = None;
        let mut dominators = 0usize;
        for point in skyline {
            if dominance_cmp(point.values(), &sample) == Dominance::Left {
                dominators += 1;
                if dominators > 1 {
                    break;
                }
                owner = Some(point);
            }
        }

        if dominators == 1 {
            if let Some(point) = owner {
                map.add(point, increment);
            }
        }
    }
    map
}

/// Exclusive volume of every skyline point.
///
/// Exact for d = 2; estimated with `samples` Monte Carlo draws otherwise.
/// An empty or zero-dimensional skyline yields an empty map.
pub(crate) fn compute<R: Rng>(skyline: &PointSet, samples: usize, rng: &mut R) -> IndicatorMap {
    let map = match skyline.dimensions() {
        0 => IndicatorMap::new(),
        2 => sweep_2d(skyline),
        _ => monte_carlo(skyline, samples, rng),
    };
    log::debug!(
        "exclusive volume: {} points, d = {}, total {:.6}",
        map.len(),
        skyline.dimensions(),
        map.total()
    );
    map
}

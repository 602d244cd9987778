//! Grid resistance: robustness of skyline membership under quantization.

use super::map::IndicatorMap;
use crate::point::{Point, PointId, PointSet};
use crate::skyline::SkylineRunner;
use std::collections::HashSet;

/// Value given to points that survive every resolution.
pub const SENTINEL: f64 = 1.0;

/// Snaps every coordinate down to the grid of resolution `g`.
fn quantize(skyline: &PointSet, g: usize) -> PointSet {
    let g = g as f64;
    let points = skyline
        .iter()
        .map(|p| p.map_values(|v| (v * g).floor() / g))
        .collect();
    // ids and dimensionality carried over unchanged
    PointSet::from_vec_unchecked(points)
}

/// Grid resistance of every skyline point.
///
/// For g from `max_resolution` down to 2, coordinates are snapped to
/// `floor(v * g) / g` and the skyline of the snapped points is recomputed.
/// A point missing from that skyline for the first time gets `1 / g`.
/// Points never missing get [`SENTINEL`].
///
/// With fewer than two points or `max_resolution < 2` no round runs and
/// every point gets [`SENTINEL`].
pub(crate) fn compute(skyline: &PointSet, max_resolution: usize) -> IndicatorMap {
    let mut map = IndicatorMap::new();
    if skyline.is_empty() {
        return map;
    }

    if skyline.len() >= 2 && max_resolution >= 2 {
        let distinct = skyline.iter().map(Point::key).collect::<HashSet<_>>().len();

        for g in (2..=max_resolution).rev() {
            let snapped = SkylineRunner::run(&quantize(skyline, g)).skyline;
            let survivors: HashSet<PointId> = snapped.iter().map(Point::id).collect();

            for point in skyline {
                if !survivors.contains(&point.id()) {
                    map.set_if_absent(point, 1.0 / g as f64);
                }
            }
            log::trace!(
                "grid {g}: {} of {} survive, {} resolved",
                survivors.len(),
                skyline.len(),
                map.len()
            );

            if map.len() == distinct {
                break;
            }
        }
    }

    for point in skyline {
        map.set_if_absent(point, SENTINEL);
    }
    log::debug!(
        "grid resistance: {} points, finest resolution {max_resolution}",
        map.len()
    );
    map
}

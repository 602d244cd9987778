//! Quality of a single top-k answer and coverage across many answers.

use crate::indicators::IndicatorResult;
use crate::point::{Point, PointId, PointSet};
use crate::ranking::DirectionalScorer;
use std::collections::HashSet;

/// How well one top-k answer represents the skyline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QueryQuality {
    /// Fraction of the k answer slots filled by skyline points.
    pub precision: f64,

    /// Fraction of the skyline present in the answer.
    pub recall: f64,

    /// Mean distance of the answer from the preference line.
    pub mean_distance: f64,

    /// Summed exclusive volume of the answer's points.
    pub exclusive_volume: f64,

    /// Summed grid resistance of the answer's points.
    pub grid_resistance: f64,
}

impl QueryQuality {
    /// Measures `answer`, the result of a top-`k` query, against `skyline`.
    ///
    /// Points absent from the indicator maps contribute 0. Precision is 0
    /// when `k == 0`, recall is 0 for an empty skyline and the mean
    /// distance is 0 for an empty answer.
    pub fn measure(
        answer: &[Point],
        k: usize,
        skyline: &PointSet,
        scorer: &DirectionalScorer,
        indicators: &IndicatorResult,
    ) -> Self {
        let skyline_ids: HashSet<PointId> = skyline.iter().map(Point::id).collect();
        let hits = answer
            .iter()
            .map(Point::id)
            .filter(|id| skyline_ids.contains(id))
            .collect::<HashSet<_>>()
            .len();

        let mean_distance = if answer.is_empty() {
            0.0
        } else {
            answer
                .iter()
                .map(|p| scorer.distance_from_line(p.values()))
                .sum::<f64>()
                / answer.len() as f64
        };

        Self {
            precision: ratio(hits, k),
            recall: ratio(hits, skyline_ids.len()),
            mean_distance,
            exclusive_volume: indicators.exclusive_volume.sum_over(answer),
            grid_resistance: indicators.grid_resistance.sum_over(answer),
        }
    }

    /// Component-wise mean of several measurements; `None` if there are
    /// none.
    pub fn mean<'a, I>(qualities: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a QueryQuality>,
    {
        let mut total = Self::default();
        let mut count = 0usize;
        for q in qualities {
            total.precision += q.precision;
            total.recall += q.recall;
            total.mean_distance += q.mean_distance;
            total.exclusive_volume += q.exclusive_volume;
            total.grid_resistance += q.grid_resistance;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Self {
            precision: total.precision / n,
            recall: total.recall / n,
            mean_distance: total.mean_distance / n,
            exclusive_volume: total.exclusive_volume / n,
            grid_resistance: total.grid_resistance / n,
        })
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

fn fraction(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole
    }
}

/// Skyline points reached by any of a series of answers.
#[derive(Debug, Clone)]
pub struct CumulativeCoverage<'a> {
    skyline: &'a PointSet,
    skyline_ids: HashSet<PointId>,
    hit: HashSet<PointId>,
    queries: usize,
}

impl<'a> CumulativeCoverage<'a> {
    pub fn new(skyline: &'a PointSet) -> Self {
        Self {
            skyline,
            skyline_ids: skyline.iter().map(Point::id).collect(),
            hit: HashSet::new(),
            queries: 0,
        }
    }

    /// Adds the skyline points of `answer` to the covered set.
    pub fn record(&mut self, answer: &[Point]) {
        self.queries += 1;
        for point in answer {
            if self.skyline_ids.contains(&point.id()) {
                self.hit.insert(point.id());
            }
        }
    }

    /// Number of answers recorded.
    pub fn queries(&self) -> usize {
        self.queries
    }

    /// Ids of the skyline points covered so far.
    pub fn covered(&self) -> &HashSet<PointId> {
        &self.hit
    }

    /// Fraction of the skyline covered so far.
    pub fn recall(&self) -> f64 {
        ratio(self.hit.len(), self.skyline_ids.len())
    }

    /// Share of the skyline's total exclusive volume held by covered points.
    pub fn exclusive_volume_fraction(&self, indicators: &IndicatorResult) -> f64 {
        let map = &indicators.exclusive_volume;
        fraction(
            map.sum_over(self.covered_points()),
            map.sum_over(self.skyline),
        )
    }

    /// Share of the skyline's total grid resistance held by covered points.
    pub fn grid_resistance_fraction(&self, indicators: &IndicatorResult) -> f64 {
        let map = &indicators.grid_resistance;
        fraction(
            map.sum_over(self.covered_points()),
            map.sum_over(self.skyline),
        )
    }

    fn covered_points(&self) -> impl Iterator<Item = &'a Point> + '_ {
        self.skyline.iter().filter(|p| self.hit.contains(&p.id()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::IndicatorMap;
    use crate::ranking::Weights;

    fn sky() -> PointSet {
        PointSet::new(vec![
            Point::new(1, vec![0.1, 0.8]),
            Point::new(2, vec![0.4, 0.5]),
            Point::new(3, vec![0.7, 0.2]),
        ])
        .unwrap()
    }

    fn indicators(sky: &PointSet) -> IndicatorResult {
        let mut evol = IndicatorMap::new();
        let mut grid = IndicatorMap::new();
        for (p, (e, g)) in sky.iter().zip([(0.06, 1.0), (0.09, 0.5), (0.09, 0.25)]) {
            evol.set(p, e);
            grid.set(p, g);
        }
        IndicatorResult {
            exclusive_volume: evol,
            grid_resistance: grid,
        }
    }

    fn scorer() -> DirectionalScorer {
        DirectionalScorer::new(Weights::new(vec![0.5, 0.5]).unwrap(), 0.5).unwrap()
    }

    #[test]
    fn test_measure_mixed_answer() {
        let sky = sky();
        let ind = indicators(&sky);
        let answer = vec![Point::new(2, vec![0.4, 0.5]), Point::new(4, vec![0.8, 0.9])];

        let q = QueryQuality::measure(&answer, 2, &sky, &scorer(), &ind);
        assert!((q.precision - 0.5).abs() < 1e-12);
        assert!((q.recall - 1.0 / 3.0).abs() < 1e-12);
        // both points lie 0.1 / sqrt(2) off the diagonal
        assert!((q.mean_distance - 0.1 / 2f64.sqrt()).abs() < 1e-12);
        assert!((q.exclusive_volume - 0.09).abs() < 1e-12);
        assert!((q.grid_resistance - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_measure_degenerate_inputs() {
        let sky = PointSet::empty();
        let ind = IndicatorResult {
            exclusive_volume: IndicatorMap::new(),
            grid_resistance: IndicatorMap::new(),
        };
        let q = QueryQuality::measure(&[], 0, &sky, &scorer(), &ind);
        assert_eq!(q, QueryQuality::default());
    }

    #[test]
    fn test_mean() {
        let a = QueryQuality {
            precision: 1.0,
            recall: 0.5,
            ..Default::default()
        };
        let b = QueryQuality {
            precision: 0.0,
            recall: 0.25,
            ..Default::default()
        };
        let m = QueryQuality::mean([&a, &b]).unwrap();
        assert!((m.precision - 0.5).abs() < 1e-12);
        assert!((m.recall - 0.375).abs() < 1e-12);
        assert!(QueryQuality::mean(std::iter::empty::<&QueryQuality>()).is_none());
    }

    #[test]
    fn test_cumulative_coverage() {
        let sky = sky();
        let ind = indicators(&sky);
        let mut coverage = CumulativeCoverage::new(&sky);

        coverage.record(&[Point::new(1, vec![0.1, 0.8]), Point::new(9, vec![0.9, 0.9])]);
        coverage.record(&[Point::new(1, vec![0.1, 0.8])]);
        assert_eq!(coverage.queries(), 2);
        assert_eq!(coverage.covered().len(), 1);
        assert!((coverage.recall() - 1.0 / 3.0).abs() < 1e-12);
        assert!((coverage.exclusive_volume_fraction(&ind) - 0.25).abs() < 1e-12);
        assert!((coverage.grid_resistance_fraction(&ind) - 1.0 / 1.75).abs() < 1e-12);

        coverage.record(&[Point::new(2, vec![0.4, 0.5]), Point::new(3, vec![0.7, 0.2])]);
        assert!((coverage.recall() - 1.0).abs() < 1e-12);
        assert!((coverage.exclusive_volume_fraction(&ind) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_coverage_of_empty_skyline() {
        let sky = PointSet::empty();
        let coverage = CumulativeCoverage::new(&sky);
        let ind = IndicatorResult {
            exclusive_volume: IndicatorMap::new(),
            grid_resistance: IndicatorMap::new(),
        };
        assert_eq!(coverage.recall(), 0.0);
        assert_eq!(coverage.exclusive_volume_fraction(&ind), 0.0);
    }
}

//! Per-point indicator values keyed by coordinates.

use crate::point::{Point, PointKey};
use std::collections::HashMap;

/// Indicator values for skyline points.
///
/// Keyed by [`PointKey`], so points with identical coordinates share one
/// entry regardless of their ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorMap {
    values: HashMap<PointKey, f64>,
}

impl IndicatorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value recorded for a point with the same coordinates as `point`.
    pub fn get(&self, point: &Point) -> Option<f64> {
        self.values.get(&point.key()).copied()
    }

    /// Like [`get`](Self::get), with missing points counted as 0.
    pub fn get_or_zero(&self, point: &Point) -> f64 {
        self.get(point).unwrap_or(0.0)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.values.contains_key(&point.key())
    }

    /// Number of distinct coordinate vectors recorded.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PointKey, f64)> {
        self.values.iter().map(|(k, &v)| (k, v))
    }

    /// Sum of all recorded values.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Sum of the values of `points`; missing points count as 0.
    pub fn sum_over<'a, I>(&self, points: I) -> f64
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points.into_iter().map(|p| self.get_or_zero(p)).sum()
    }

    pub(crate) fn set(&mut self, point: &Point, value: f64) {
        self.values.insert(point.key(), value);
    }

    pub(crate) fn add(&mut self, point: &Point, delta: f64) {
        *self.values.entry(point.key()).or_insert(0.0) += delta;
    }

    /// Records `value` unless the point already has one.
    pub(crate) fn set_if_absent(&mut self, point: &Point, value: f64) {
        self.values.entry(point.key()).or_insert(value);
    }
}

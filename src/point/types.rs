//! Points, structural point keys and point sets.

use crate::error::{Result, SkylineError};
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// Identifier assigned to a point at ingestion time.
pub type PointId = u64;

/// Bit pattern used for coordinate identity.
///
/// `-0.0` folds onto `0.0` and every NaN onto the canonical NaN so that
/// equality and hashing agree.
#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else if v.is_nan() {
        f64::NAN.to_bits()
    } else {
        v.to_bits()
    }
}

/// A point in d-dimensional attribute space.
///
/// Smaller coordinates are better in every dimension (minimization).
///
/// Equality and hashing consider **only the coordinates**: two points
/// with different ids but identical coordinates are the same logical
/// key. Use [`Point::id`] when identity by identifier is needed.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawPoint", into = "RawPoint")
)]
pub struct Point {
    id: PointId,
    values: Vec<f64>,
    sum: f64,
}

impl Point {
    /// Creates a point with an explicit id.
    pub fn new(id: PointId, values: Vec<f64>) -> Self {
        let sum = values.iter().sum();
        Self { id, values, sum }
    }

    /// Returns the identifier.
    pub fn id(&self) -> PointId {
        self.id
    }

    /// Returns the coordinate vector.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sum of all coordinates, cached at construction.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Number of coordinates.
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if `self` dominates `other`.
    ///
    /// `self` dominates `other` when it is no worse in every dimension
    /// and strictly better in at least one. Identical points do not
    /// dominate each other.
    pub fn dominates(&self, other: &Point) -> bool {
        let mut strict = false;
        for (&a, &b) in self.values.iter().zip(other.values.iter()) {
            if a > b {
                return false;
            }
            if a < b {
                strict = true;
            }
        }
        strict
    }

    /// Structural key over the coordinates, for use in maps and sets.
    pub fn key(&self) -> PointKey {
        PointKey(self.values.iter().map(|&v| canonical_bits(v)).collect())
    }

    /// Returns a copy with the same id and coordinates mapped by `f`.
    pub(crate) fn map_values(&self, f: impl Fn(f64) -> f64) -> Point {
        Point::new(self.id, self.values.iter().map(|&v| f(v)).collect())
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(&a, &b)| canonical_bits(a) == canonical_bits(b))
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.values.len());
        for &v in &self.values {
            state.write_u64(canonical_bits(v));
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:.6}")?;
        }
        write!(f, "]")
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawPoint {
    id: PointId,
    values: Vec<f64>,
}

#[cfg(feature = "serde")]
impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        Point::new(raw.id, raw.values)
    }
}

#[cfg(feature = "serde")]
impl From<Point> for RawPoint {
    fn from(p: Point) -> Self {
        RawPoint {
            id: p.id,
            values: p.values,
        }
    }
}

/// Structural key identifying a point by its coordinates alone.
///
/// Indicator maps are keyed by this type, never by [`PointId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointKey(Vec<u64>);

impl From<&Point> for PointKey {
    fn from(p: &Point) -> Self {
        p.key()
    }
}

/// An ordered, immutable collection of equal-length points.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set, rejecting members of unequal dimensionality.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if let Some(first) = points.first() {
            let d = first.dimensions();
            if let Some(bad) = points.iter().find(|p| p.dimensions() != d) {
                return Err(SkylineError::InvalidInput(format!(
                    "point {} has {} coordinates, expected {d}",
                    bad.id(),
                    bad.dimensions()
                )));
            }
        }
        Ok(Self { points })
    }

    /// Creates an empty point set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps points already known to share one dimensionality.
    pub(crate) fn from_vec_unchecked(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of dimensions: 0 if empty, else the length of the first point.
    pub fn dimensions(&self) -> usize {
        self.points.first().map_or(0, Point::dimensions)
    }

    /// Returns the points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns `true` if a point with `id` is present.
    pub fn contains_id(&self, id: PointId) -> bool {
        self.points.iter().any(|p| p.id() == id)
    }

    /// Consumes the set and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl TryFrom<Vec<Point>> for PointSet {
    type Error = SkylineError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        PointSet::new(points)
    }
}

impl From<PointSet> for Vec<Point> {
    fn from(set: PointSet) -> Self {
        set.points
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sum_cached() {
        let p = Point::new(1, vec![0.25, 0.5, 1.0]);
        assert!((p.sum() - 1.75).abs() < 1e-12);
        assert_eq!(p.dimensions(), 3);
        assert!((p[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_dominates() {
        let a = Point::new(1, vec![2.0, 3.0]);
        let b = Point::new(2, vec![4.0, 4.0]);
        let c = Point::new(3, vec![1.0, 5.0]);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
        assert!(!a.dominates(&c));
        assert!(!c.dominates(&a));
    }

    #[test]
    fn test_equal_points_do_not_dominate() {
        let a = Point::new(1, vec![2.0, 2.0]);
        let b = Point::new(2, vec![2.0, 2.0]);
        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_equality_ignores_id() {
        let a = Point::new(1, vec![0.1, 0.2]);
        let b = Point::new(99, vec![0.1, 0.2]);
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());

        let set: HashSet<Point> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_negative_zero_same_key() {
        let a = Point::new(1, vec![0.0, 1.0]);
        let b = Point::new(2, vec![-0.0, 1.0]);
        assert_eq!(a, b);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_display() {
        let p = Point::new(1, vec![0.5, 1.0]);
        assert_eq!(p.to_string(), "[0.500000, 1.000000]");
    }

    #[test]
    fn test_point_set_dimensions() {
        assert_eq!(PointSet::empty().dimensions(), 0);
        let set = PointSet::new(vec![Point::new(1, vec![1.0, 2.0, 3.0])]).unwrap();
        assert_eq!(set.dimensions(), 3);
        assert_eq!(set.len(), 1);
        assert!(set.contains_id(1));
        assert!(!set.contains_id(2));
    }

    #[test]
    fn test_point_set_rejects_ragged() {
        let result = PointSet::new(vec![
            Point::new(1, vec![1.0, 2.0]),
            Point::new(2, vec![1.0]),
        ]);
        assert!(matches!(result, Err(SkylineError::InvalidInput(_))));
    }
}

//! Scoring rules: linear utility and directional (utility + deviation).

use super::weights::{inverse_weights, Weights};
use crate::error::{Result, SkylineError};
use crate::point::Point;

/// A rule assigning a ranking score to a point.
///
/// **Lower scores rank ahead**, consistent with the minimization
/// convention used for dominance.
///
/// # Examples
///
/// ```
/// use u_skyline::point::Point;
/// use u_skyline::ranking::ScoringRule;
///
/// // Rank by the largest coordinate (minimax).
/// struct WorstAttribute;
///
/// impl ScoringRule for WorstAttribute {
///     fn name(&self) -> &str { "WorstAttribute" }
///     fn score(&self, point: &Point) -> f64 {
///         point.values().iter().copied().fold(f64::NEG_INFINITY, f64::max)
///     }
/// }
///
/// assert_eq!(WorstAttribute.score(&Point::new(1, vec![0.2, 0.7])), 0.7);
/// ```
pub trait ScoringRule {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the score of a point. Lower is better.
    fn score(&self, point: &Point) -> f64;
}

/// Weighted sum of coordinates: `s(p) = sum_i w_i * p_i`.
#[derive(Debug, Clone)]
pub struct LinearScorer {
    weights: Weights,
}

impl LinearScorer {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Linear utility of a coordinate vector.
    pub fn utility(&self, values: &[f64]) -> f64 {
        linear_utility(self.weights.as_slice(), values)
    }
}

impl ScoringRule for LinearScorer {
    fn name(&self) -> &str {
        "Linear"
    }

    fn score(&self, point: &Point) -> f64 {
        self.utility(point.values())
    }
}

#[inline]
fn linear_utility(weights: &[f64], values: &[f64]) -> f64 {
    weights.iter().zip(values).map(|(w, v)| w * v).sum()
}

/// Directional score blending linear utility with the distance from the
/// ideal preference line.
///
/// With inverted weights `u` (see [`inverse_weights`]) and `q = sum_i u_i²`:
///
/// - `s(p) = sum_i w_i * p_i`
/// - `t = sum_i u_i * p_i`, `r_i = p_i - u_i * t / q`, `l(p) = |r|`
/// - `f(p) = beta * s(p) + (1 - beta) * l(p)`
///
/// `beta = 1` reduces to [`LinearScorer`]; `beta = 0` ranks purely by
/// closeness to the preference line.
///
/// # Example
///
/// ```
/// use u_skyline::point::Point;
/// use u_skyline::ranking::{DirectionalScorer, Weights};
///
/// let scorer = DirectionalScorer::new(Weights::new(vec![1.0, 0.0]).unwrap(), 0.5).unwrap();
/// let p = Point::new(1, vec![0.3, 0.6]);
/// assert!((scorer.distance_from_line(p.values()) - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DirectionalScorer {
    weights: Weights,
    inverted: Vec<f64>,
    sum_of_squares: f64,
    beta: f64,
}

impl DirectionalScorer {
    /// Creates a scorer whose preference line is derived from `weights`.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidInput`] if `beta` is not in `[0, 1]`.
    pub fn new(weights: Weights, beta: f64) -> Result<Self> {
        let inverted = inverse_weights(weights.as_slice());
        Self::with_inverted_weights(weights, inverted, beta)
    }

    /// Creates a scorer with an explicitly supplied preference line.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidInput`] if `beta` is not in `[0, 1]`, if
    /// `inverted` differs in length from `weights`, or if `inverted` has a
    /// negative or non-finite component or no positive one.
    pub fn with_inverted_weights(weights: Weights, inverted: Vec<f64>, beta: f64) -> Result<Self> {
        check_beta(beta)?;
        if inverted.len() != weights.len() {
            return Err(SkylineError::InvalidInput(format!(
                "inverted weights have {} components, weights have {}",
                inverted.len(),
                weights.len()
            )));
        }
        if inverted.iter().any(|u| !u.is_finite() || *u < 0.0) {
            return Err(SkylineError::InvalidInput(
                "inverted weights must be finite and non-negative".into(),
            ));
        }
        let sum_of_squares: f64 = inverted.iter().map(|u| u * u).sum();
        if sum_of_squares == 0.0 {
            return Err(SkylineError::InvalidInput(
                "inverted weights must not all be zero".into(),
            ));
        }
        Ok(Self {
            weights,
            inverted,
            sum_of_squares,
            beta,
        })
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Direction of the preference line.
    pub fn inverted_weights(&self) -> &[f64] {
        &self.inverted
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Linear utility `s(p)`.
    pub fn linear_utility(&self, values: &[f64]) -> f64 {
        linear_utility(self.weights.as_slice(), values)
    }

    /// Euclidean distance `l(p)` from the preference line.
    pub fn distance_from_line(&self, values: &[f64]) -> f64 {
        let t = linear_utility(&self.inverted, values);
        let scale = t / self.sum_of_squares;
        values
            .iter()
            .zip(&self.inverted)
            .map(|(v, u)| {
                let r = v - u * scale;
                r * r
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Combined score `f(p)` of a coordinate vector.
    pub fn score_values(&self, values: &[f64]) -> f64 {
        self.beta * self.linear_utility(values)
            + (1.0 - self.beta) * self.distance_from_line(values)
    }
}

impl ScoringRule for DirectionalScorer {
    fn name(&self) -> &str {
        "Directional"
    }

    fn score(&self, point: &Point) -> f64 {
        self.score_values(point.values())
    }
}

pub(crate) fn check_beta(beta: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&beta) {
        return Err(SkylineError::InvalidInput(format!(
            "beta must be in [0, 1], got {beta}"
        )));
    }
    Ok(())
}

//! Preference weight vectors.

use crate::error::{Result, SkylineError};
use rand::Rng;

/// A validated preference direction.
///
/// Components are finite and non-negative, with at least one positive.
/// They conventionally sum to 1, which is not enforced.
///
/// # Examples
///
/// ```
/// use u_skyline::ranking::Weights;
///
/// let w = Weights::new(vec![0.25, 0.75]).unwrap();
/// assert_eq!(w.len(), 2);
///
/// assert!(Weights::new(vec![0.0, 0.0]).is_err());
/// assert!(Weights::new(vec![-0.5, 1.5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Weights(Vec<f64>);

impl Weights {
    /// Validates and wraps a weight vector.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidInput`] if the vector is empty, has a
    /// negative or non-finite component, or is all zero.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(SkylineError::InvalidInput(
                "weight vector must not be empty".into(),
            ));
        }
        if let Some((i, w)) = values
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(SkylineError::InvalidInput(format!(
                "weight {i} must be finite and non-negative, got {w}"
            )));
        }
        if values.iter().all(|&w| w == 0.0) {
            return Err(SkylineError::InvalidInput(
                "weight vector must have at least one non-zero component".into(),
            ));
        }
        Ok(Self(values))
    }

    /// Draws a random weight vector summing to 1.
    ///
    /// Component i is uniform in `[0, 1 - (w_0 + ... + w_{i-1})]`; the
    /// last component takes the remainder.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidInput`] if `dimensions` is 0.
    pub fn random<R: Rng>(dimensions: usize, rng: &mut R) -> Result<Self> {
        if dimensions == 0 {
            return Err(SkylineError::InvalidInput(
                "weight vector needs at least one dimension".into(),
            ));
        }
        let mut values = Vec::with_capacity(dimensions);
        let mut cumulative = 0.0_f64;
        for _ in 1..dimensions {
            let remaining = (1.0 - cumulative).max(0.0);
            let w = rng.random_range(0.0..=remaining);
            values.push(w);
            cumulative += w;
        }
        values.push((1.0 - values.iter().sum::<f64>()).max(0.0));
        Self::new(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: validated vectors have at least one component.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Direction of the ideal preference line; see [`inverse_weights`].
    pub fn inverse(&self) -> Vec<f64> {
        inverse_weights(&self.0)
    }

    /// Fails unless the vector has exactly `dimensions` components.
    pub(crate) fn check_dimensions(&self, dimensions: usize) -> Result<()> {
        if self.0.len() != dimensions {
            return Err(SkylineError::InvalidInput(format!(
                "weight vector has {} components but points have {dimensions} dimensions",
                self.0.len()
            )));
        }
        Ok(())
    }
}

impl TryFrom<Vec<f64>> for Weights {
    type Error = SkylineError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Weights::new(values)
    }
}

impl From<Weights> for Vec<f64> {
    fn from(w: Weights) -> Self {
        w.0
    }
}

impl AsRef<[f64]> for Weights {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Inverted weights defining the ideal preference line.
///
/// - No zero component: `u_i = 1 / (w_i * sum_j(1 / w_j))`.
/// - Otherwise each zero component gets `1 / (number of zeros)` and every
///   non-zero component gets 0.
///
/// Both branches yield components summing to 1.
///
/// # Example
///
/// ```
/// use u_skyline::ranking::inverse_weights;
///
/// assert_eq!(inverse_weights(&[1.0, 0.0]), vec![0.0, 1.0]);
///
/// let u = inverse_weights(&[0.25, 0.75]);
/// assert!((u[0] - 0.75).abs() < 1e-12);
/// assert!((u[1] - 0.25).abs() < 1e-12);
/// ```
pub fn inverse_weights(weights: &[f64]) -> Vec<f64> {
    let zeros = weights.iter().filter(|&&w| w == 0.0).count();
    if zeros > 0 {
        let share = 1.0 / zeros as f64;
        return weights
            .iter()
            .map(|&w| if w == 0.0 { share } else { 0.0 })
            .collect();
    }
    let sum_of_inverses: f64 = weights.iter().map(|&w| 1.0 / w).sum();
    weights.iter().map(|&w| 1.0 / (w * sum_of_inverses)).collect()
}

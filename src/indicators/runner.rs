//! Entry points for indicator computation.

use super::config::{IndicatorConfig, DEFAULT_SAMPLES};
use super::map::IndicatorMap;
use crate::error::{Result, SkylineError};
use crate::point::PointSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Both robustness indicators for one skyline.
#[derive(Debug, Clone)]
pub struct IndicatorResult {
    /// Exclusive dominance volume per skyline point.
    pub exclusive_volume: IndicatorMap,

    /// Grid resistance per skyline point.
    pub grid_resistance: IndicatorMap,
}

/// Computes robustness indicators over an already-computed skyline.
pub struct IndicatorRunner;

impl IndicatorRunner {
    /// Computes exclusive volume and grid resistance.
    ///
    /// # Errors
    ///
    /// [`SkylineError::InvalidConfig`] if `config` fails validation.
    pub fn run(skyline: &PointSet, config: &IndicatorConfig) -> Result<IndicatorResult> {
        config.validate().map_err(SkylineError::InvalidConfig)?;
        let mut rng = create_rng(config.seed);
        Ok(IndicatorResult {
            exclusive_volume: super::exclusive_volume::compute(skyline, config.samples, &mut rng),
            grid_resistance: super::grid_resistance::compute(skyline, config.max_resolution),
        })
    }
}

fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Exclusive volume with the default sample count and a fresh seed.
///
/// Exact in two dimensions, a Monte Carlo estimate otherwise.
///
/// # Example
///
/// ```
/// use u_skyline::indicators::exclusive_volume;
/// use u_skyline::point::{Point, PointSet};
///
/// let sky = PointSet::new(vec![
///     Point::new(1, vec![0.1, 0.8]),
///     Point::new(2, vec![0.4, 0.5]),
///     Point::new(3, vec![0.7, 0.2]),
/// ])
/// .unwrap();
///
/// let map = exclusive_volume(&sky);
/// let first = map.get(&sky.points()[0]).unwrap();
/// assert!((first - 0.06).abs() < 1e-12);
/// ```
pub fn exclusive_volume(skyline: &PointSet) -> IndicatorMap {
    let mut rng = create_rng(None);
    super::exclusive_volume::compute(skyline, DEFAULT_SAMPLES, &mut rng)
}

/// Exclusive volume using the sample count and seed of `config`.
///
/// # Errors
///
/// [`SkylineError::InvalidConfig`] if `config` fails validation.
pub fn exclusive_volume_with(skyline: &PointSet, config: &IndicatorConfig) -> Result<IndicatorMap> {
    config.validate().map_err(SkylineError::InvalidConfig)?;
    let mut rng = create_rng(config.seed);
    Ok(super::exclusive_volume::compute(skyline, config.samples, &mut rng))
}

/// Exclusive volume drawing samples from a caller-supplied generator.
pub fn exclusive_volume_with_rng<R: Rng>(
    skyline: &PointSet,
    samples: usize,
    rng: &mut R,
) -> IndicatorMap {
    super::exclusive_volume::compute(skyline, samples, rng)
}

/// Grid resistance scanning resolutions `max_resolution` down to 2.
///
/// # Example
///
/// ```
/// use u_skyline::indicators::grid_resistance;
/// use u_skyline::point::{Point, PointSet};
///
/// let sky = PointSet::new(vec![
///     Point::new(1, vec![0.1, 0.9]),
///     Point::new(2, vec![0.9, 0.1]),
/// ])
/// .unwrap();
///
/// let map = grid_resistance(&sky, 250);
/// assert_eq!(map.get(&sky.points()[0]), Some(1.0));
/// ```
pub fn grid_resistance(skyline: &PointSet, max_resolution: usize) -> IndicatorMap {
    super::grid_resistance::compute(skyline, max_resolution)
}

/// Grid resistance using the finest resolution of `config`.
///
/// # Errors
///
/// [`SkylineError::InvalidConfig`] if `config` fails validation.
pub fn grid_resistance_with(skyline: &PointSet, config: &IndicatorConfig) -> Result<IndicatorMap> {
    config.validate().map_err(SkylineError::InvalidConfig)?;
    Ok(super::grid_resistance::compute(skyline, config.max_resolution))
}

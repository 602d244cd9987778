//! Indicator configuration.

/// Default Monte Carlo sample count for exclusive volume in d != 2.
pub const DEFAULT_SAMPLES: usize = 100_000;

/// Default finest grid resolution for grid resistance.
pub const DEFAULT_MAX_RESOLUTION: usize = 250;

/// Configuration for robustness indicators.
///
/// # Examples
///
/// ```
/// use u_skyline::indicators::IndicatorConfig;
///
/// let config = IndicatorConfig::default()
///     .with_samples(20_000)
///     .with_max_resolution(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorConfig {
    /// Monte Carlo samples for exclusive volume outside the 2-D case.
    ///
    /// Fixed regardless of dimensionality; variance grows with d.
    pub samples: usize,

    /// Finest grid resolution for grid resistance.
    ///
    /// Values below 2 run no quantization round, so every skyline point
    /// receives the sentinel 1.0.
    pub max_resolution: usize,

    /// Random seed for reproducible sampling. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            max_resolution: DEFAULT_MAX_RESOLUTION,
            seed: None,
        }
    }
}

impl IndicatorConfig {
    pub fn with_samples(mut self, n: usize) -> Self {
        self.samples = n;
        self
    }

    pub fn with_max_resolution(mut self, g: usize) -> Self {
        self.max_resolution = g;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.samples == 0 {
            return Err("samples must be positive".into());
        }
        Ok(())
    }
}

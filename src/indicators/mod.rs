//! Robustness indicators for skyline points.
//!
//! Both indicators take an already-computed skyline and return an
//! [`IndicatorMap`] keyed by coordinates.
//!
//! - **Exclusive volume** ([`exclusive_volume`]): share of the unit
//!   hypercube that a point dominates alone. Exact sweep in 2-D, Monte
//!   Carlo sampling otherwise.
//! - **Grid resistance** ([`grid_resistance`]): `1 / g` for the finest
//!   grid resolution g at which snapping coordinates to the grid knocks
//!   the point out of the skyline; 1.0 if it never drops out.
//!
//! Sampling is the only source of randomness in the crate; pass a seed
//! through [`IndicatorConfig`] for reproducible results.

mod config;
mod exclusive_volume;
mod grid_resistance;
mod map;
mod runner;

pub use config::{IndicatorConfig, DEFAULT_MAX_RESOLUTION, DEFAULT_SAMPLES};
pub use grid_resistance::SENTINEL;
pub use map::IndicatorMap;
pub use runner::{
    exclusive_volume, exclusive_volume_with, exclusive_volume_with_rng, grid_resistance,
    grid_resistance_with, IndicatorResult, IndicatorRunner,
};

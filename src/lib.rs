//! Multi-objective query evaluation over finite point sets.
//!
//! Provides the building blocks for comparing preference queries against
//! the Pareto-optimal subset of a data set:
//!
//! - **Skyline**: sort-filter computation of the points no other point
//!   dominates. Every attribute is minimized.
//! - **Heap**: comparator-parameterized binary heap and a bounded queue
//!   that keeps the k best elements of a stream.
//! - **Ranking**: linear top-k and directional top-k, which blends linear
//!   utility with the distance from the ideal preference line.
//! - **Indicators**: exclusive dominance volume (exact in 2-D, Monte Carlo
//!   otherwise) and grid resistance under coordinate quantization.
//! - **Evaluation**: precision, recall and indicator coverage of top-k
//!   answers relative to the skyline.
//! - **Point**: the data model, plus ingestion from string-valued rows.
//!
//! # Example
//!
//! ```
//! use u_skyline::point::{Point, PointSet};
//! use u_skyline::ranking::{directional_top_k, Weights, DEFAULT_BETA};
//! use u_skyline::skyline;
//!
//! let points = PointSet::new(vec![
//!     Point::new(1, vec![0.1, 0.8]),
//!     Point::new(2, vec![0.4, 0.5]),
//!     Point::new(3, vec![0.7, 0.2]),
//!     Point::new(4, vec![0.8, 0.9]),
//! ])
//! .unwrap();
//!
//! let sky = skyline(&points);
//! assert_eq!(sky.len(), 3);
//!
//! let weights = Weights::new(vec![0.5, 0.5]).unwrap();
//! let best = directional_top_k(&points, 1, &weights, DEFAULT_BETA).unwrap();
//! assert_eq!(best[0].id(), 2);
//! ```
//!
//! # Architecture
//!
//! Everything is single-threaded and synchronous. Sampling in
//! [`indicators`] is the only randomness; seed it through
//! [`IndicatorConfig`](indicators::IndicatorConfig) for reproducible runs.
//! Diagnostics go through the `log` facade; the crate never installs a
//! logger.

pub mod error;
pub mod evaluation;
pub mod heap;
pub mod indicators;
pub mod point;
pub mod ranking;
pub mod skyline;

pub use error::{Result, SkylineError};
pub use indicators::{exclusive_volume, grid_resistance};
pub use ranking::{directional_top_k, nearest_to_direction, top_k};
pub use skyline::skyline;

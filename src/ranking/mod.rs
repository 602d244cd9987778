//! Linear and directional top-k ranking.
//!
//! Scores are minimized: lower ranks ahead.
//!
//! # Key Types
//!
//! - [`Weights`]: validated, non-negative preference direction
//! - [`ScoringRule`]: trait for anything that scores a point
//! - [`LinearScorer`]: `s(p) = sum_i w_i * p_i`
//! - [`DirectionalScorer`]: `beta * s(p) + (1 - beta) * l(p)` where `l(p)`
//!   is the distance from the ideal preference line
//!
//! # Queries
//!
//! - [`top_k`], [`directional_top_k`], [`top_k_by`]: bounded-heap top-k
//! - [`nearest_to_direction`]: point closest to the preference line

mod query;
mod scorer;
mod weights;

pub use query::{directional_top_k, nearest_to_direction, top_k, top_k_by};
pub use scorer::{DirectionalScorer, LinearScorer, ScoringRule};
pub use weights::{inverse_weights, Weights};

/// Default interpolation between linear utility and line distance.
pub const DEFAULT_BETA: f64 = 2.0 / 3.0;

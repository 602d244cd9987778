//! Skyline (Pareto front) computation.
//!
//! All attributes are **minimized**: a point dominates another when it
//! is no worse in every dimension and strictly better in at least one.
//!
//! - [`skyline`]: Pareto-optimal subset of a [`PointSet`](crate::point::PointSet)
//! - [`SkylineRunner`]: the same, with comparison count and timing
//! - [`dominance_cmp`]: pairwise dominance test
//!
//! # References
//!
//! - Börzsönyi, Kossmann & Stocker (2001), "The Skyline Operator"
//! - Chomicki, Godfrey, Gryz & Liang (2003), "Skyline with Presorting"

mod dominance;
mod runner;

pub use dominance::{dominance_cmp, lexicographic_cmp, Dominance};
pub use runner::{skyline, SkylineResult, SkylineRunner};

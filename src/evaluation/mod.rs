//! Measuring how well top-k answers represent the skyline.
//!
//! - [`QueryQuality`]: precision, recall, line distance and indicator mass
//!   of one answer
//! - [`CumulativeCoverage`]: skyline points reached by a series of answers
//! - [`rank_of`]: where a chosen point lands in a directional ranking

mod quality;
mod rank;

pub use quality::{CumulativeCoverage, QueryQuality};
pub use rank::rank_of;

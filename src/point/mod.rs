//! Geometric data model.
//!
//! - [`Point`]: id plus coordinate vector; equality and hashing follow
//!   the coordinates only
//! - [`PointKey`]: structural key used by indicator maps
//! - [`PointSet`]: ordered collection of equal-length points
//! - [`ingest`]: table rows to [`PointSet`] with a skip/abort policy

mod ingest;
mod types;

pub use ingest::{ingest, IngestConfig, ParsePolicy};
pub use types::{Point, PointId, PointKey, PointSet};

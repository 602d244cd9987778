//! Conversion of string-valued tables into point sets.
//!
//! Reading files is left to the caller; this module starts from rows
//! already split into `attribute -> cell` maps.

use super::types::{Point, PointId, PointSet};
use crate::error::{Result, SkylineError};
use std::collections::HashMap;

/// What to do with a row whose selected cell does not parse as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParsePolicy {
    /// Drop the row and keep going.
    #[default]
    Skip,
    /// Stop and report the first bad cell.
    Abort,
}

/// Ingestion settings.
///
/// # Examples
///
/// ```
/// use u_skyline::point::{IngestConfig, ParsePolicy};
///
/// let config = IngestConfig::new(["price", "distance"])
///     .with_policy(ParsePolicy::Abort)
///     .with_first_id(1);
/// assert_eq!(config.attributes.len(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IngestConfig {
    /// Attributes to extract, in coordinate order.
    pub attributes: Vec<String>,

    /// Handling of unparsable cells.
    pub policy: ParsePolicy,

    /// Id given to the first accepted row. Later rows count up from here.
    pub first_id: PointId,
}

impl IngestConfig {
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
            policy: ParsePolicy::default(),
            first_id: 1,
        }
    }

    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_first_id(mut self, id: PointId) -> Self {
        self.first_id = id;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.attributes.is_empty() {
            return Err("at least one attribute must be selected".into());
        }
        Ok(())
    }
}

/// Builds a point set from table rows.
///
/// Each selected cell is trimmed and parsed as `f64`. Ids are assigned
/// sequentially from [`IngestConfig::first_id`] and advance only for
/// accepted rows, so skipped rows leave no gaps.
///
/// # Errors
///
/// - [`SkylineError::InvalidConfig`] if no attribute is selected.
/// - [`SkylineError::Parse`] on the first bad cell under
///   [`ParsePolicy::Abort`].
pub fn ingest(rows: &[HashMap<String, String>], config: &IngestConfig) -> Result<PointSet> {
    config.validate().map_err(SkylineError::InvalidConfig)?;

    let mut next_id = config.first_id;
    let mut points = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    'rows: for (row_idx, row) in rows.iter().enumerate() {
        let mut values = Vec::with_capacity(config.attributes.len());
        for attribute in &config.attributes {
            let raw = row.get(attribute).map(String::as_str).unwrap_or("");
            match raw.trim().parse::<f64>() {
                Ok(v) => values.push(v),
                Err(_) => match config.policy {
                    ParsePolicy::Skip => {
                        log::warn!("skipping row {row_idx}: bad value {raw:?} for `{attribute}`");
                        skipped += 1;
                        continue 'rows;
                    }
                    ParsePolicy::Abort => {
                        return Err(SkylineError::Parse {
                            row: row_idx,
                            attribute: attribute.clone(),
                            value: raw.to_string(),
                        });
                    }
                },
            }
        }
        points.push(Point::new(next_id, values));
        next_id += 1;
    }

    log::debug!(
        "ingested {} points ({} skipped) over {} attributes",
        points.len(),
        skipped,
        config.attributes.len()
    );

    // every point has exactly `attributes.len()` coordinates
    Ok(PointSet::from_vec_unchecked(points))
}

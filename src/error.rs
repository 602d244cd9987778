//! Error type shared by every fallible operation in the crate.

/// Errors raised by skyline, ranking and indicator operations.
///
/// All failures are attributable to malformed input; nothing here is
/// transient and no operation retries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkylineError {
    /// Weights, points or parameters that cannot produce a meaningful result.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A selected cell could not be parsed during ingestion with the
    /// abort policy.
    #[error("row {row}: cannot parse attribute `{attribute}` from {value:?}")]
    Parse {
        /// Zero-based index of the offending row.
        row: usize,
        /// Attribute (column) name.
        attribute: String,
        /// Raw cell content, empty if the cell was missing.
        value: String,
    },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SkylineError>;

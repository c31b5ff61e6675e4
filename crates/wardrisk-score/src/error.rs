//! Error types for composite score computation.

use thiserror::Error;

/// Errors that abort a scoring run. No partial table is ever returned.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScoreError {
    /// Fewer than two covariates survived resolution.
    #[error("too few covariates: need at least 2, found {found} ({covariates:?})")]
    TooFewCovariates {
        /// Number of resolved covariates.
        found: usize,
        /// The covariates that did resolve.
        covariates: Vec<String>,
    },

    /// More covariates than model ids can number.
    #[error("too many covariates: at most {max} supported, found {found}")]
    TooManyCovariates {
        /// Number of resolved covariates.
        found: usize,
        /// Largest supported covariate count.
        max: usize,
    },

    /// A resolved covariate is not a column of the input table.
    #[error("column not found: {column}")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },

    /// A covariate column has a type that cannot be read as numbers.
    #[error("column {column} is not numeric (dtype {dtype})")]
    NonNumericColumn {
        /// Column name.
        column: String,
        /// Polars dtype of the column.
        dtype: String,
    },

    /// A text covariate column holds a cell that is not a number.
    #[error("column {column} row {row}: '{value}' is not a number")]
    NonNumericValue {
        /// Column name.
        column: String,
        /// Zero-based row index.
        row: usize,
        /// Offending cell text.
        value: String,
    },

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// Result type for scoring operations.
pub type Result<T> = std::result::Result<T, ScoreError>;

//! Covariate list resolution and validation.

use polars::prelude::DataFrame;
use tracing::debug;
use wardrisk_model::CovariateRequest;

use crate::error::{Result, ScoreError};

/// Minimum number of covariates needed to form one composite.
pub const MIN_COVARIATES: usize = 2;

/// Largest covariate list whose `2^N - N - 1` models fit in a `usize` id.
pub const MAX_COVARIATES: usize = usize::BITS as usize - 1;

/// Resolve the covariates the engine will normalize and combine.
///
/// Requested covariates are kept when the table has a column of that name,
/// in request order, without duplicates. The settlement and prevalence
/// columns are then appended when requested, without checking the table;
/// a missing one fails later as [`ScoreError::MissingColumn`].
///
/// # Errors
///
/// - [`ScoreError::TooFewCovariates`] if fewer than two covariates remain
/// - [`ScoreError::TooManyCovariates`] if more than [`MAX_COVARIATES`] remain
pub fn resolve_covariates(df: &DataFrame, request: &CovariateRequest) -> Result<Vec<String>> {
    let mut resolved: Vec<String> = Vec::with_capacity(request.covariates.len() + 2);

    for covariate in &request.covariates {
        if df.get_column_index(covariate).is_none() {
            debug!(covariate = %covariate, "covariate not in table, skipped");
            continue;
        }
        if !resolved.contains(covariate) {
            resolved.push(covariate.clone());
        }
    }

    for column in request.appended_columns() {
        if !resolved.iter().any(|existing| existing == column) {
            resolved.push(column.to_string());
        }
    }

    if resolved.len() < MIN_COVARIATES {
        return Err(ScoreError::TooFewCovariates {
            found: resolved.len(),
            covariates: resolved,
        });
    }
    if resolved.len() > MAX_COVARIATES {
        return Err(ScoreError::TooManyCovariates {
            found: resolved.len(),
            max: MAX_COVARIATES,
        });
    }
    Ok(resolved)
}

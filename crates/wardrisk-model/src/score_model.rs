//! Candidate scoring formulas.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::naming::{model_column_name, normalized_column_name};

/// One composite score: the unweighted mean of a covariate subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreModel {
    /// Sequential id, starting at 1, in enumeration order.
    pub id: usize,
    /// Covariates in the subset, in resolved-list order.
    pub covariates: Vec<String>,
}

impl ScoreModel {
    pub fn new(id: usize, covariates: Vec<String>) -> Self {
        Self { id, covariates }
    }

    /// Output column holding this model's composite score.
    pub fn column_name(&self) -> String {
        model_column_name(self.id)
    }

    /// Normalized columns averaged by this model.
    pub fn normalized_columns(&self) -> Vec<String> {
        self.covariates
            .iter()
            .map(|covariate| normalized_column_name(covariate))
            .collect()
    }

    /// Number of covariates in the subset.
    pub fn size(&self) -> usize {
        self.covariates.len()
    }
}

impl fmt::Display for ScoreModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.column_name(), self.covariates.join(" + "))
    }
}

/// Number of models generated from `covariates` covariates: 2^N - N - 1.
///
/// ```
/// use wardrisk_model::expected_model_count;
///
/// assert_eq!(expected_model_count(0), 0);
/// assert_eq!(expected_model_count(2), 1);
/// assert_eq!(expected_model_count(3), 4);
/// assert_eq!(expected_model_count(5), 26);
/// ```
pub fn expected_model_count(covariates: usize) -> usize {
    if covariates < 2 {
        return 0;
    }
    u32::try_from(covariates)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .map_or(usize::MAX, |subsets| subsets - covariates - 1)
}

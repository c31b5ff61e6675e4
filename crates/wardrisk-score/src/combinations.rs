//! Enumeration of covariate subsets.
//!
//! Subsets are produced by increasing size, `2..=N`, and within one size in
//! the standard combinations-without-repetition order over the resolved
//! covariate list. This order fixes the `model_N` ids and must not change.

use itertools::Itertools;
use wardrisk_model::ScoreModel;

/// Index subsets of `0..covariates` with at least two members.
pub fn subset_indices(covariates: usize) -> impl Iterator<Item = Vec<usize>> {
    (2..=covariates).flat_map(move |size| (0..covariates).combinations(size))
}

/// Every score model for a resolved covariate list, ids starting at 1.
///
/// # Examples
///
/// ```
/// use wardrisk_score::enumerate_models;
///
/// let covariates = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let models = enumerate_models(&covariates);
///
/// let listing: Vec<String> = models.iter().map(ToString::to_string).collect();
/// assert_eq!(
///     listing,
///     vec!["model_1: A + B", "model_2: A + C", "model_3: B + C", "model_4: A + B + C"]
/// );
/// ```
pub fn enumerate_models(covariates: &[String]) -> Vec<ScoreModel> {
    subset_indices(covariates.len())
        .enumerate()
        .map(|(index, subset)| {
            let members = subset.iter().map(|&i| covariates[i].clone()).collect();
            ScoreModel::new(index + 1, members)
        })
        .collect()
}

//! Naming contract for generated output columns.
//!
//! Every generated column name in an output table comes from these
//! functions; the scoring engine never concatenates names on its own.

/// Prefix of a normalized covariate column.
pub const NORMALIZED_PREFIX: &str = "norm_";

/// Prefix of a composite score column.
pub const MODEL_PREFIX: &str = "model_";

/// Name of the normalized column derived from `covariate`.
///
/// ```
/// use wardrisk_model::normalized_column_name;
///
/// assert_eq!(normalized_column_name("mean_EVI"), "norm_mean_EVI");
/// ```
pub fn normalized_column_name(covariate: &str) -> String {
    format!("{NORMALIZED_PREFIX}{covariate}")
}

/// Name of the composite score column for model `id` (ids start at 1).
///
/// ```
/// use wardrisk_model::model_column_name;
///
/// assert_eq!(model_column_name(1), "model_1");
/// assert_eq!(model_column_name(26), "model_26");
/// ```
pub fn model_column_name(id: usize) -> String {
    format!("{MODEL_PREFIX}{id}")
}

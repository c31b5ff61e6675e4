//! Composite score engine.
//!
//! One run resolves the covariate list, normalizes every covariate once,
//! enumerates every subset of two or more covariates and computes one
//! composite column per subset. Merge-suffix artifacts are cleaned from the
//! input columns, then the generated columns, built as immutable named
//! columns, are stacked onto it in a single step.
//!
//! Any failure aborts the run before an output table exists.

use std::collections::HashSet;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, info, info_span, warn};
use wardrisk_model::{
    CovariateRequest, ScoreModel, SuffixPolicy, expected_model_count, normalized_column_name,
};

use crate::cleanup::clean_merge_suffixes_except;
use crate::combinations::{enumerate_models, subset_indices};
use crate::composite::composite_values;
use crate::error::Result;
use crate::frame::CovariateFrame;
use crate::normalize::{NormalizationRange, normalize};
use crate::resolve::resolve_covariates;

/// Covariate count above which a run is logged as large.
pub const LARGE_COVARIATE_COUNT: usize = 20;

/// How one covariate was normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct CovariateSummary {
    /// Source column name.
    pub covariate: String,
    /// Generated `norm_*` column name.
    pub normalized_column: String,
    /// Rows with a value.
    pub non_missing: usize,
    /// Range used for scaling; `None` when every value is missing.
    pub range: Option<NormalizationRange>,
}

impl CovariateSummary {
    /// True when the covariate has zero variance and normalizes to NaN.
    pub fn is_degenerate(&self) -> bool {
        self.range.is_some_and(|range| range.is_degenerate())
    }
}

/// Output of one scoring run.
#[derive(Debug, Clone)]
pub struct CompositeScores {
    /// Input table plus normalized and composite columns.
    pub table: DataFrame,
    /// Resolved covariates, in order.
    pub covariates: Vec<CovariateSummary>,
    /// Score models, in id order.
    pub models: Vec<ScoreModel>,
}

impl CompositeScores {
    pub fn covariate_names(&self) -> Vec<&str> {
        self.covariates
            .iter()
            .map(|summary| summary.covariate.as_str())
            .collect()
    }

    pub fn model(&self, id: usize) -> Option<&ScoreModel> {
        self.models.iter().find(|model| model.id == id)
    }

    pub fn into_table(self) -> DataFrame {
        self.table
    }
}

/// Composite score engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    suffixes: SuffixPolicy,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different merge-suffix policy for the cleanup pass.
    #[must_use]
    pub fn with_suffix_policy(mut self, suffixes: SuffixPolicy) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn suffix_policy(&self) -> &SuffixPolicy {
        &self.suffixes
    }

    /// Score `table` with the covariates selected by `request`.
    ///
    /// # Errors
    ///
    /// - [`ScoreError::TooFewCovariates`](crate::ScoreError::TooFewCovariates)
    ///   when fewer than two covariates resolve
    /// - [`ScoreError::TooManyCovariates`](crate::ScoreError::TooManyCovariates)
    ///   when the model ids would overflow
    /// - [`ScoreError::MissingColumn`](crate::ScoreError::MissingColumn) when a
    ///   requested settlement or prevalence column is absent
    /// - type errors when a covariate cannot be read as numbers
    pub fn run(&self, table: &DataFrame, request: &CovariateRequest) -> Result<CompositeScores> {
        let span = info_span!("composite_scores", rows = table.height());
        let _guard = span.enter();

        let covariates = resolve_covariates(table, request)?;
        info!(
            count = covariates.len(),
            covariates = ?covariates,
            "covariate check passed"
        );
        if covariates.len() > LARGE_COVARIATE_COUNT {
            warn!(
                count = covariates.len(),
                models = expected_model_count(covariates.len()),
                "large covariate list, model count grows exponentially"
            );
        }

        let frame = CovariateFrame::bind(table, &covariates)?;

        let mut summaries = Vec::with_capacity(covariates.len());
        let mut normalized: Vec<Vec<Option<f64>>> = Vec::with_capacity(covariates.len());
        for column in frame.columns() {
            let range = NormalizationRange::of(column.values());
            let summary = CovariateSummary {
                covariate: column.name().to_string(),
                normalized_column: normalized_column_name(column.name()),
                non_missing: column.non_missing(),
                range,
            };
            if summary.is_degenerate() {
                warn!(
                    covariate = %summary.covariate,
                    "zero-variance covariate, normalized values are NaN"
                );
            } else if range.is_none() {
                warn!(covariate = %summary.covariate, "covariate has no values");
            }
            normalized.push(normalize(column.values()));
            summaries.push(summary);
        }

        let height = frame.height();
        let models: Vec<ScoreModel> = enumerate_models(&covariates);
        let mut score_columns = Vec::with_capacity(models.len());
        for (model, subset) in models.iter().zip(subset_indices(covariates.len())) {
            debug!(model = %model, "processing model");

            let inputs: Vec<&[Option<f64>]> =
                subset.iter().map(|&i| normalized[i].as_slice()).collect();
            let values = composite_values(&inputs, height);
            score_columns.push(Series::new(model.column_name().into(), values).into_column());
        }

        let mut generated: Vec<Column> = summaries
            .iter()
            .zip(normalized)
            .map(|(summary, values)| {
                Series::new(summary.normalized_column.as_str().into(), values).into_column()
            })
            .collect();
        generated.extend(score_columns);

        let input = clean_merge_suffixes_except(table, &self.suffixes, &covariates)?;
        let table = assemble(&input, generated)?;
        info!(
            models = models.len(),
            columns = table.width(),
            "composite scores complete"
        );

        Ok(CompositeScores {
            table,
            covariates: summaries,
            models,
        })
    }
}

/// Score `table` with the default engine.
///
/// # Examples
///
/// ```
/// use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
/// use wardrisk_model::CovariateRequest;
/// use wardrisk_score::compute_composite_scores;
///
/// let table = DataFrame::new(vec![
///     Series::new("A".into(), vec![1.0, 2.0, 3.0]).into_column(),
///     Series::new("B".into(), vec![30.0, 20.0, 10.0]).into_column(),
/// ])
/// .unwrap();
///
/// let scores = compute_composite_scores(&table, &CovariateRequest::new(["A", "B"])).unwrap();
/// assert_eq!(scores.models.len(), 1);
/// assert_eq!(scores.table.width(), 5);
/// ```
pub fn compute_composite_scores(
    table: &DataFrame,
    request: &CovariateRequest,
) -> Result<CompositeScores> {
    ScoreEngine::default().run(table, request)
}

/// Stack generated columns onto the input in one step.
///
/// Input columns that share a generated name are replaced, so scoring an
/// already scored table yields the same layout again.
fn assemble(input: &DataFrame, generated: Vec<Column>) -> Result<DataFrame> {
    let generated_names: HashSet<String> = generated
        .iter()
        .map(|column| column.name().to_string())
        .collect();

    let mut columns: Vec<Column> = Vec::with_capacity(input.width() + generated.len());
    for column in input.get_columns() {
        if generated_names.contains(column.name().as_str()) {
            debug!(column = %column.name(), "replacing existing generated column");
            continue;
        }
        columns.push(column.clone());
    }
    columns.extend(generated);

    Ok(DataFrame::new(columns)?)
}

//! Covariate request handed to the scoring engine.

use serde::{Deserialize, Serialize};

use crate::source::SourceCatalog;

/// Column holding the numerically coded settlement type.
pub const DEFAULT_SETTLEMENT_COLUMN: &str = "settlement_type";

/// Conventional name of the under-5 test positivity rate column.
pub const DEFAULT_PREVALENCE_COLUMN: &str = "u5_tpr_rdt";

/// Which columns the engine should normalize and combine.
///
/// `covariates` are filtered against the table by the engine; the settlement
/// and prevalence columns are appended unconditionally when requested, so a
/// missing one surfaces as a missing-column error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CovariateRequest {
    /// Candidate covariate columns, in priority order.
    pub covariates: Vec<String>,
    /// Append the settlement-type column.
    #[serde(default)]
    pub include_settlement: bool,
    /// Name of the settlement-type column.
    #[serde(default = "default_settlement_column")]
    pub settlement_column: String,
    /// Prevalence column to append, if any.
    #[serde(default)]
    pub prevalence_column: Option<String>,
}

fn default_settlement_column() -> String {
    DEFAULT_SETTLEMENT_COLUMN.to_string()
}

impl Default for CovariateRequest {
    fn default() -> Self {
        Self {
            covariates: Vec::new(),
            include_settlement: false,
            settlement_column: default_settlement_column(),
            prevalence_column: None,
        }
    }
}

impl CovariateRequest {
    pub fn new<I, S>(covariates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            covariates: covariates.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Build a request from supplied data-source ids.
    ///
    /// Unknown ids are dropped here; callers that care should inspect
    /// [`SourceCatalog::resolve`] themselves.
    pub fn from_sources<S: AsRef<str>>(catalog: &SourceCatalog, supplied: &[S]) -> Self {
        Self::new(catalog.resolve(supplied).columns)
    }

    #[must_use]
    pub fn with_settlement(mut self, include: bool) -> Self {
        self.include_settlement = include;
        self
    }

    #[must_use]
    pub fn with_settlement_column(mut self, column: impl Into<String>) -> Self {
        self.settlement_column = column.into();
        self
    }

    #[must_use]
    pub fn with_prevalence(mut self, column: Option<String>) -> Self {
        self.prevalence_column = column;
        self
    }

    /// Extra columns appended after filtering, in order.
    pub fn appended_columns(&self) -> Vec<&str> {
        let mut columns = Vec::new();
        if self.include_settlement {
            columns.push(self.settlement_column.as_str());
        }
        if let Some(prevalence) = &self.prevalence_column {
            columns.push(prevalence.as_str());
        }
        columns
    }
}

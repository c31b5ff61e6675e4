//! Score configuration: optional TOML file merged with command-line flags.
//!
//! ```toml
//! sources = ["evi", "rainfall", "h2o_distance"]
//! include_settlement = true
//! include_prevalence = false
//!
//! [source_columns]
//! evi = "mean_EVI_2023"
//!
//! [suffixes]
//! primary = ".x"
//! duplicate = ".y"
//! ```
//!
//! Flags given on the command line win over the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wardrisk_model::{
    CovariateRequest, DEFAULT_PREVALENCE_COLUMN, DEFAULT_SETTLEMENT_COLUMN, SourceCatalog,
    SuffixPolicy,
};

/// Settings for one `score` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreConfig {
    /// Data-source ids to score.
    pub sources: Vec<String>,
    /// Extra covariate columns used as-is, after the source columns.
    pub covariates: Vec<String>,
    pub include_settlement: bool,
    pub settlement_column: String,
    pub include_prevalence: bool,
    pub prevalence_column: String,
    /// Fail on unknown source ids instead of warning.
    pub strict_sources: bool,
    /// Column overrides (or additions) for the source catalog.
    pub source_columns: BTreeMap<String, String>,
    pub suffixes: SuffixPolicy,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            covariates: Vec::new(),
            include_settlement: false,
            settlement_column: DEFAULT_SETTLEMENT_COLUMN.to_string(),
            include_prevalence: false,
            prevalence_column: DEFAULT_PREVALENCE_COLUMN.to_string(),
            strict_sources: false,
            source_columns: BTreeMap::new(),
            suffixes: SuffixPolicy::default(),
        }
    }
}

/// Values supplied on the command line. `None` and empty lists defer to the
/// config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreOverrides {
    pub sources: Vec<String>,
    pub covariates: Vec<String>,
    pub include_settlement: Option<bool>,
    pub settlement_column: Option<String>,
    pub include_prevalence: Option<bool>,
    pub prevalence_column: Option<String>,
    pub strict_sources: bool,
}

/// Everything the engine needs, resolved from a [`ScoreConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePlan {
    pub request: CovariateRequest,
    /// Supplied source ids the catalog does not know.
    pub unknown_sources: Vec<String>,
    pub suffixes: SuffixPolicy,
}

impl ScoreConfig {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.suffixes.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Apply command-line values on top of the file.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ScoreOverrides) -> Self {
        if !overrides.sources.is_empty() {
            self.sources = overrides.sources;
        }
        if !overrides.covariates.is_empty() {
            self.covariates = overrides.covariates;
        }
        if let Some(include) = overrides.include_settlement {
            self.include_settlement = include;
        }
        if let Some(column) = overrides.settlement_column {
            self.settlement_column = column;
        }
        if let Some(include) = overrides.include_prevalence {
            self.include_prevalence = include;
        }
        if let Some(column) = overrides.prevalence_column {
            self.prevalence_column = column;
        }
        self.strict_sources |= overrides.strict_sources;
        self
    }

    /// Default catalog with `[source_columns]` applied.
    pub fn catalog(&self) -> SourceCatalog {
        let mut catalog = SourceCatalog::default();
        for (id, column) in &self.source_columns {
            catalog.set(id.as_str(), column.as_str());
        }
        catalog
    }

    /// Resolve sources and build the engine request.
    ///
    /// # Errors
    ///
    /// Fails on an unknown source id when `strict_sources` is set.
    pub fn plan(&self) -> Result<ScorePlan> {
        let resolved = self.catalog().resolve(&self.sources);
        let unknown_sources = resolved.unknown.clone();
        let mut covariates = if self.strict_sources {
            resolved.into_strict()?
        } else {
            resolved.columns
        };
        for column in &self.covariates {
            if !covariates.contains(column) {
                covariates.push(column.clone());
            }
        }

        let request = CovariateRequest::new(covariates)
            .with_settlement(self.include_settlement)
            .with_settlement_column(self.settlement_column.as_str())
            .with_prevalence(
                self.include_prevalence
                    .then(|| self.prevalence_column.clone()),
            );

        Ok(ScorePlan {
            request,
            unknown_sources,
            suffixes: self.suffixes.clone(),
        })
    }
}

/// `<dir>/<stem>_scores.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "wards".into(), |stem| stem.to_string_lossy());
    input.with_file_name(format!("{stem}_scores.csv"))
}

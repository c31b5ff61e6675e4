//! Data model for composite ward risk scoring.
//!
//! - **source**: data-source catalog mapping identifiers to canonical columns
//! - **request**: the covariate request handed to the scoring engine
//! - **naming**: naming contract for generated columns (`norm_*`, `model_N`)
//! - **score_model**: one candidate scoring formula (a covariate subset)
//! - **suffix**: merge-suffix policy used by the output cleanup pass

pub mod error;
pub mod naming;
pub mod request;
pub mod score_model;
pub mod source;
pub mod suffix;

pub use error::{ModelError, Result};
pub use naming::{MODEL_PREFIX, NORMALIZED_PREFIX, model_column_name, normalized_column_name};
pub use request::{CovariateRequest, DEFAULT_PREVALENCE_COLUMN, DEFAULT_SETTLEMENT_COLUMN};
pub use score_model::{ScoreModel, expected_model_count};
pub use source::{ResolvedSources, SourceCatalog, SourceEntry};
pub use suffix::{SuffixKind, SuffixPolicy};

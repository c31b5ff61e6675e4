//! Composite risk scoring for ward covariate tables.
//!
//! Given a ward table and a covariate request, this crate:
//!
//! - **resolve**: validates the covariate list against the table
//! - **frame**: binds each covariate to a typed numeric column
//! - **normalize**: min-max normalizes each covariate into `norm_<covariate>`
//! - **combinations**: enumerates every subset of two or more covariates
//! - **composite**: averages each subset row-wise into `model_<id>`
//! - **cleanup**: removes merge-suffix artifacts from the input columns
//!
//! The crate performs no I/O.
//!
//! # Example
//!
//! ```ignore
//! use wardrisk_model::{CovariateRequest, SourceCatalog};
//! use wardrisk_score::compute_composite_scores;
//!
//! let request = CovariateRequest::from_sources(&SourceCatalog::default(), &["evi", "rainfall"])
//!     .with_settlement(true);
//! let scores = compute_composite_scores(&wards, &request)?;
//! for model in &scores.models {
//!     println!("{model}");
//! }
//! ```

pub mod cleanup;
pub mod combinations;
pub mod composite;
pub mod engine;
mod error;
pub mod frame;
pub mod normalize;
pub mod resolve;

pub use cleanup::{clean_merge_suffixes, clean_merge_suffixes_except};
pub use combinations::{enumerate_models, subset_indices};
pub use composite::composite_values;
pub use engine::{CompositeScores, CovariateSummary, ScoreEngine, compute_composite_scores};
pub use error::{Result, ScoreError};
pub use frame::{CovariateColumn, CovariateFrame};
pub use normalize::{NormalizationRange, normalize};
pub use resolve::{MAX_COVARIATES, MIN_COVARIATES, resolve_covariates};

use std::path::PathBuf;

use wardrisk_model::ScoreModel;
use wardrisk_score::CovariateSummary;

#[derive(Debug)]
pub struct ScoreResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub columns: usize,
    pub covariates: Vec<CovariateSummary>,
    pub models: Vec<ScoreModel>,
    pub unknown_sources: Vec<String>,
}

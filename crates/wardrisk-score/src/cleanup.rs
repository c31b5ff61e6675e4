//! Merge-suffix cleanup of input tables.
//!
//! Columns carrying the duplicate suffix are dropped. Columns carrying the
//! primary suffix get their canonical name back, unless a column with the
//! canonical name already exists, in which case the unsuffixed one wins.
//! Numeric content is never touched.
//!
//! The engine runs this over the input columns only, with the resolved
//! covariates kept as named, so generated `norm_*` and `model_*` columns
//! always match the names reported alongside them.

use polars::prelude::{Column, DataFrame};
use tracing::debug;
use wardrisk_common::column_names;
use wardrisk_model::{SuffixKind, SuffixPolicy};

use crate::error::Result;

/// Remove merge-suffix artifacts from `df`, keeping column order.
pub fn clean_merge_suffixes(df: &DataFrame, policy: &SuffixPolicy) -> Result<DataFrame> {
    clean_merge_suffixes_except(df, policy, &[])
}

/// Like [`clean_merge_suffixes`], but columns named in `keep` pass through
/// untouched whatever their suffix.
pub fn clean_merge_suffixes_except(
    df: &DataFrame,
    policy: &SuffixPolicy,
    keep: &[String],
) -> Result<DataFrame> {
    let names = column_names(df);
    let mut kept: Vec<Column> = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let name = column.name().as_str();
        if keep.iter().any(|keep_name| keep_name == name) {
            kept.push(column.clone());
            continue;
        }
        match policy.classify(name) {
            SuffixKind::Plain => kept.push(column.clone()),
            SuffixKind::Duplicate => {
                debug!(column = %name, "dropped duplicate merge column");
            }
            SuffixKind::Primary(canonical) => {
                if names.iter().any(|existing| existing == canonical) {
                    debug!(column = %name, canonical = %canonical, "dropped in favour of unsuffixed column");
                    continue;
                }
                let mut renamed = column.clone();
                renamed.rename(canonical.into());
                kept.push(renamed);
            }
        }
    }

    Ok(DataFrame::new(kept)?)
}

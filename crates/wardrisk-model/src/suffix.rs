//! Merge-suffix policy.
//!
//! Joining two ward tables that share column names leaves suffixed
//! duplicates behind (`WardName.x`, `WardName.y`). The output cleanup pass
//! drops the duplicate side and restores the canonical name of the primary
//! side.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Suffixes produced by an upstream join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixPolicy {
    /// Suffix of the retained side (stripped).
    pub primary: String,
    /// Suffix of the discarded side (column dropped).
    pub duplicate: String,
}

impl Default for SuffixPolicy {
    fn default() -> Self {
        Self {
            primary: ".x".to_string(),
            duplicate: ".y".to_string(),
        }
    }
}

/// How the cleanup pass treats one column name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixKind<'a> {
    /// No merge suffix; keep as is.
    Plain,
    /// Primary side of a merge; canonical name without the suffix.
    Primary(&'a str),
    /// Duplicate side of a merge; drop.
    Duplicate,
}

impl SuffixPolicy {
    pub fn new(primary: impl Into<String>, duplicate: impl Into<String>) -> Result<Self> {
        let policy = Self {
            primary: primary.into(),
            duplicate: duplicate.into(),
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Both suffixes must be non-empty and distinct.
    pub fn validate(&self) -> Result<()> {
        if self.primary.is_empty() || self.duplicate.is_empty() {
            return Err(ModelError::InvalidSuffixPolicy(
                "suffixes must not be empty".to_string(),
            ));
        }
        if self.primary == self.duplicate {
            return Err(ModelError::InvalidSuffixPolicy(format!(
                "primary and duplicate suffix are both '{}'",
                self.primary
            )));
        }
        Ok(())
    }

    /// Classify a column name.
    ///
    /// A name consisting only of a suffix is treated as plain.
    pub fn classify<'a>(&self, name: &'a str) -> SuffixKind<'a> {
        if let Some(stem) = name.strip_suffix(self.duplicate.as_str())
            && !stem.is_empty()
        {
            return SuffixKind::Duplicate;
        }
        match name.strip_suffix(self.primary.as_str()) {
            Some(stem) if !stem.is_empty() => SuffixKind::Primary(stem),
            _ => SuffixKind::Plain,
        }
    }
}

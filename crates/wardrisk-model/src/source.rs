//! Data-source catalog.
//!
//! Upstream covariate products (rasters, surveys) are identified by short ids
//! such as `evi` or `rainfall`. The catalog maps each id to the canonical
//! column name it produces in the ward table. Catalog order is significant:
//! it fixes the covariate order and therefore the `model_N` numbering.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One data source and the column it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Identifier supplied by the caller (matched case-insensitively).
    pub id: String,
    /// Canonical column name in the ward table.
    pub column: String,
    /// Short human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SourceEntry {
    pub fn new(id: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            column: column.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Covariate columns resolved from supplied data-source ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSources {
    /// Canonical column names, in catalog order, without duplicates.
    pub columns: Vec<String>,
    /// Supplied ids that the catalog does not know, in supplied order.
    pub unknown: Vec<String>,
}

impl ResolvedSources {
    /// Returns the columns, or an error naming the first unknown id.
    pub fn into_strict(self) -> Result<Vec<String>> {
        match self.unknown.into_iter().next() {
            Some(id) => Err(ModelError::UnknownSource(id)),
            None => Ok(self.columns),
        }
    }
}

/// Ordered mapping from data-source id to canonical column name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCatalog {
    entries: Vec<SourceEntry>,
}

impl Default for SourceCatalog {
    fn default() -> Self {
        let entries = [
            ("evi", "mean_EVI", "Enhanced vegetation index"),
            ("ndvi", "mean_NDVI", "Normalized difference vegetation index"),
            ("rainfall", "mean_rainfall", "Mean monthly rainfall"),
            ("h2o_distance", "distance_to_water", "Distance to nearest water body"),
            ("elevation", "elevation", "Mean elevation"),
            ("rh", "RH_mean", "Mean relative humidity"),
            ("temp", "temp_mean", "Mean land surface temperature"),
            ("ndwi", "mean_NDWI", "Normalized difference water index"),
            ("ndmi", "mean_NDMI", "Normalized difference moisture index"),
            ("housing", "housing_quality", "Housing quality index"),
            ("pfpr", "pfpr", "Plasmodium falciparum parasite rate"),
            ("flood", "flood", "Flood extent"),
        ]
        .into_iter()
        .map(|(id, column, description)| SourceEntry::new(id, column).with_description(description))
        .collect();
        Self { entries }
    }
}

impl SourceCatalog {
    /// Creates a catalog from explicit entries (order preserved).
    pub fn new(entries: Vec<SourceEntry>) -> Self {
        Self { entries }
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&SourceEntry> {
        let id = id.trim();
        self.entries
            .iter()
            .find(|entry| entry.id.eq_ignore_ascii_case(id))
    }

    /// Canonical column for `id`.
    pub fn column_for(&self, id: &str) -> Result<&str> {
        self.get(id)
            .map(|entry| entry.column.as_str())
            .ok_or_else(|| ModelError::UnknownSource(id.trim().to_string()))
    }

    /// Override the column of an existing id, or append a new entry.
    pub fn set(&mut self, id: impl Into<String>, column: impl Into<String>) {
        let id = id.into();
        let column = column.into();
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.id.eq_ignore_ascii_case(&id))
        {
            Some(entry) => entry.column = column,
            None => self.entries.push(SourceEntry::new(id, column)),
        }
    }

    /// Resolve supplied ids to covariate columns.
    ///
    /// The result follows catalog order, not supplied order, so the same
    /// set of ids always yields the same covariate list.
    pub fn resolve<S: AsRef<str>>(&self, supplied: &[S]) -> ResolvedSources {
        let mut resolved = ResolvedSources::default();
        for entry in &self.entries {
            let wanted = supplied
                .iter()
                .any(|id| id.as_ref().trim().eq_ignore_ascii_case(&entry.id));
            if wanted && !resolved.columns.contains(&entry.column) {
                resolved.columns.push(entry.column.clone());
            }
        }
        for id in supplied {
            let id = id.as_ref().trim();
            if self.get(id).is_none() && !resolved.unknown.iter().any(|u| u == id) {
                resolved.unknown.push(id.to_string());
            }
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_maps_known_ids() {
        let catalog = SourceCatalog::default();
        assert_eq!(catalog.column_for("evi"), Ok("mean_EVI"));
        assert_eq!(catalog.column_for("EVI"), Ok("mean_EVI"));
        assert_eq!(catalog.column_for("h2o_distance"), Ok("distance_to_water"));
        assert_eq!(
            catalog.column_for("lights"),
            Err(ModelError::UnknownSource("lights".to_string()))
        );
    }

    #[test]
    fn set_overrides_then_appends() {
        let mut catalog = SourceCatalog::default();
        let before = catalog.len();
        catalog.set("EVI", "evi_2023");
        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.column_for("evi"), Ok("evi_2023"));

        catalog.set("lights", "night_lights");
        assert_eq!(catalog.len(), before + 1);
        assert_eq!(catalog.entries().last().unwrap().column, "night_lights");
    }

    #[test]
    fn resolve_skips_duplicate_columns() {
        let catalog = SourceCatalog::new(vec![
            SourceEntry::new("a", "col_a"),
            SourceEntry::new("alias", "col_a"),
            SourceEntry::new("b", "col_b"),
        ]);
        let resolved = catalog.resolve(&["alias", "a", "b"]);
        assert_eq!(resolved.columns, vec!["col_a", "col_b"]);
        assert!(resolved.unknown.is_empty());
    }
}

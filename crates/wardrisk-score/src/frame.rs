//! Typed covariate columns bound from a ward table.
//!
//! Covariate names are resolved to numeric columns once, at entry, so a
//! missing or non-numeric column fails before any output is built.

use polars::prelude::{DataFrame, DataType};
use wardrisk_common::parse_numeric_cell;

use crate::error::{Result, ScoreError};

/// One covariate read as `f64` values, `None` where missing.
#[derive(Debug, Clone, PartialEq)]
pub struct CovariateColumn {
    name: String,
    values: Vec<Option<f64>>,
}

impl CovariateColumn {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Number of non-missing values.
    pub fn non_missing(&self) -> usize {
        self.values
            .iter()
            .filter(|value| value.is_some_and(|v| !v.is_nan()))
            .count()
    }
}

/// The resolved covariates of one table, in resolved-list order.
#[derive(Debug, Clone, PartialEq)]
pub struct CovariateFrame {
    height: usize,
    columns: Vec<CovariateColumn>,
}

impl CovariateFrame {
    /// Bind each named covariate to a numeric column of `df`.
    ///
    /// # Errors
    ///
    /// - [`ScoreError::MissingColumn`] if a name is not a column of `df`
    /// - [`ScoreError::NonNumericColumn`] if the dtype cannot hold numbers
    /// - [`ScoreError::NonNumericValue`] if a text cell does not parse
    pub fn bind(df: &DataFrame, covariates: &[String]) -> Result<Self> {
        let columns = covariates
            .iter()
            .map(|name| {
                Ok(CovariateColumn {
                    name: name.clone(),
                    values: read_numeric_column(df, name)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            height: df.height(),
            columns,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn columns(&self) -> &[CovariateColumn] {
        &self.columns
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(CovariateColumn::name)
    }
}

/// Read a column as `f64`, coercing integers and numeric text.
fn read_numeric_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name).map_err(|_| ScoreError::MissingColumn {
        column: name.to_string(),
    })?;
    let dtype = column.dtype();

    if dtype.is_float() || dtype.is_integer() || matches!(dtype, DataType::Null) {
        let floats = column.cast(&DataType::Float64)?;
        return Ok(floats.f64()?.into_iter().collect());
    }

    if matches!(dtype, DataType::String) {
        return column
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, cell)| match cell {
                None => Ok(None),
                Some(text) => {
                    parse_numeric_cell(text).map_err(|_| ScoreError::NonNumericValue {
                        column: name.to_string(),
                        row,
                        value: text.to_string(),
                    })
                }
            })
            .collect();
    }

    Err(ScoreError::NonNumericColumn {
        column: name.to_string(),
        dtype: dtype.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn test_bind_casts_integers() {
        let df = DataFrame::new(vec![
            Series::new("settlement_type".into(), vec![1i32, 2, 3]).into_column(),
            Series::new("pfpr".into(), vec![Some(0.1), None, Some(0.4)]).into_column(),
        ])
        .unwrap();

        let frame = CovariateFrame::bind(&df, &names(&["settlement_type", "pfpr"])).unwrap();

        assert_eq!(frame.height(), 3);
        assert_eq!(frame.columns()[0].values(), &[Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(frame.columns()[1].values(), &[Some(0.1), None, Some(0.4)]);
        assert_eq!(frame.columns()[1].non_missing(), 2);
        assert_eq!(frame.names().collect::<Vec<_>>(), vec!["settlement_type", "pfpr"]);
    }

    #[test]
    fn test_bind_parses_numeric_text() {
        let df = DataFrame::new(vec![
            Series::new("mean_EVI".into(), vec!["0.25", "NA", " 0.5 "]).into_column(),
        ])
        .unwrap();

        let frame = CovariateFrame::bind(&df, &names(&["mean_EVI"])).unwrap();

        assert_eq!(frame.columns()[0].values(), &[Some(0.25), None, Some(0.5)]);
    }

    #[test]
    fn test_bind_rejects_text_cells() {
        let df = DataFrame::new(vec![
            Series::new("settlement_type".into(), vec!["1", "urban"]).into_column(),
        ])
        .unwrap();

        let err = CovariateFrame::bind(&df, &names(&["settlement_type"])).unwrap_err();

        assert!(matches!(
            err,
            ScoreError::NonNumericValue { ref column, row: 1, ref value }
                if column == "settlement_type" && value == "urban"
        ));
    }

    #[test]
    fn test_bind_rejects_boolean_columns() {
        let df = DataFrame::new(vec![
            Series::new("flood".into(), vec![true, false]).into_column(),
        ])
        .unwrap();

        let err = CovariateFrame::bind(&df, &names(&["flood"])).unwrap_err();

        assert!(matches!(err, ScoreError::NonNumericColumn { ref column, .. } if column == "flood"));
    }

    #[test]
    fn test_bind_reports_missing_column() {
        let df = DataFrame::new(vec![
            Series::new("mean_EVI".into(), vec![1.0, 2.0]).into_column(),
        ])
        .unwrap();

        let err = CovariateFrame::bind(&df, &names(&["mean_EVI", "u5_tpr_rdt"])).unwrap_err();

        assert!(matches!(err, ScoreError::MissingColumn { ref column } if column == "u5_tpr_rdt"));
        assert_eq!(err.to_string(), "column not found: u5_tpr_rdt");
    }
}

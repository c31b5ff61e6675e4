//! Polars value utility functions.
//!
//! This module provides helper functions for reading ward tables, including
//! numeric cell parsing with missing-value tokens and compact float formatting.

use std::num::ParseFloatError;

use polars::prelude::DataFrame;

/// Tokens treated as a missing cell when a covariate column arrives as text.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
const MISSING_TOKENS: &[&str] = &["", "na", "nan", "null", "none"];

/// Returns true if a text cell represents a missing value.
///
/// # Examples
///
/// ```
/// use wardrisk_common::is_missing_token;
///
/// assert!(is_missing_token(""));
/// assert!(is_missing_token(" NA "));
/// assert!(is_missing_token("NaN"));
/// assert!(!is_missing_token("0"));
/// ```
pub fn is_missing_token(value: &str) -> bool {
    let trimmed = value.trim();
    MISSING_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

/// Parses a text cell from a numeric covariate column.
///
/// Missing tokens yield `Ok(None)`; anything else must parse as a float.
///
/// # Examples
///
/// ```
/// use wardrisk_common::parse_numeric_cell;
///
/// assert_eq!(parse_numeric_cell("2.5"), Ok(Some(2.5)));
/// assert_eq!(parse_numeric_cell("NA"), Ok(None));
/// assert!(parse_numeric_cell("urban").is_err());
/// ```
pub fn parse_numeric_cell(value: &str) -> Result<Option<f64>, ParseFloatError> {
    if is_missing_token(value) {
        return Ok(None);
    }
    value.trim().parse::<f64>().map(Some)
}

/// Formats a floating-point number as a string without trailing zeros after decimal.
///
/// Only trims trailing zeros if the number contains a decimal point.
/// Integer-valued floats like 40.0 are formatted as "40", not "4".
///
/// # Examples
///
/// ```
/// use wardrisk_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Returns the column names of a DataFrame as owned strings, in table order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

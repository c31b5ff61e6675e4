//! Min-max normalization of a covariate column.
//!
//! Values are rescaled to `[0, 1]` using the minimum and maximum over the
//! non-missing values of the same column. Missing positions stay missing.
//! NaN inputs count as missing.
//!
//! A constant column has `max == min`; the resulting `0 / 0` is left as NaN
//! and flows into every composite that uses the covariate.

/// Minimum and maximum of the non-missing values of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationRange {
    pub min: f64,
    pub max: f64,
}

impl NormalizationRange {
    /// Range over the non-missing values, or `None` if every value is missing.
    pub fn of(values: &[Option<f64>]) -> Option<Self> {
        values
            .iter()
            .filter_map(|value| present(*value))
            .fold(None, |range, value| match range {
                None => Some(Self {
                    min: value,
                    max: value,
                }),
                Some(Self { min, max }) => Some(Self {
                    min: min.min(value),
                    max: max.max(value),
                }),
            })
    }

    /// True when every non-missing value is identical.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Rescale one value into this range.
    pub fn scale(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Min-max normalize a column, preserving missing positions.
///
/// # Examples
///
/// ```
/// use wardrisk_score::normalize;
///
/// let normalized = normalize(&[Some(1.0), None, Some(3.0), Some(2.0)]);
/// assert_eq!(normalized, vec![Some(0.0), None, Some(1.0), Some(0.5)]);
///
/// assert_eq!(normalize(&[None, None]), vec![None, None]);
/// ```
pub fn normalize(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let Some(range) = NormalizationRange::of(values) else {
        return vec![None; values.len()];
    };
    values
        .iter()
        .map(|value| present(*value).map(|v| range.scale(v)))
        .collect()
}

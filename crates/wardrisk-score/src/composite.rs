//! Row-wise composite score computation.

/// Row-wise unweighted mean of `columns`.
///
/// A row is missing if any contributing value is missing. NaN values are not
/// missing here; they make the row NaN.
pub fn composite_values(columns: &[&[Option<f64>]], height: usize) -> Vec<Option<f64>> {
    let count = columns.len() as f64;
    (0..height)
        .map(|row| {
            let mut sum = 0.0;
            for column in columns {
                sum += column[row]?;
            }
            Some(sum / count)
        })
        .collect()
}

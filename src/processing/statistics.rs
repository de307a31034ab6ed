/// Maximum of `column` over the rows of a matrix, or `None` when no row
/// contributes a value.
///
/// Rows too short to have the column, and NaN cells, are skipped. On ties
/// the first row holding the maximum wins.
pub fn try_max_of_column<R: AsRef<[f64]>>(rows: &[R], column: usize) -> Option<f64> {
    rows.iter()
        .filter_map(|row| row.as_ref().get(column).copied())
        .filter(|v| !v.is_nan())
        .fold(None, |best, v| match best {
            Some(b) if b >= v => Some(b),
            _ => Some(v),
        })
}

/// Maximum of `column` over the rows of a matrix, used to establish the
/// value-axis range.
///
/// An empty matrix yields `0.0`, which cannot be told apart from a real
/// maximum of zero. Use [`try_max_of_column`] when that matters.
pub fn max_of_column<R: AsRef<[f64]>>(rows: &[R], column: usize) -> f64 {
    try_max_of_column(rows, column).unwrap_or(0.0)
}

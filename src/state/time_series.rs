use serde::{Deserialize, Serialize};

use crate::processing::statistics::{max_of_column, try_max_of_column};
use crate::time::nearest::find_closest_by;
use crate::time::point::PointInTime;

/// Column-oriented chart data. Each row of `values` holds one sample per
/// column; column 0 is the sample's timestamp in epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
    pub colors: Vec<String>,
}

impl TimeSeries {
    pub const TIME_COLUMN: usize = 0;

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Timestamp of a row, `None` when the row has no finite time cell.
    pub fn row_time(row: &[f64]) -> Option<PointInTime> {
        row.get(Self::TIME_COLUMN)
            .copied()
            .filter(|t| t.is_finite())
            .map(PointInTime::from)
    }

    /// Timestamps of the rows that have one. Rows without a usable time cell
    /// are skipped, so positions here need not match indices into `values`.
    pub fn timestamps(&self) -> Vec<PointInTime> {
        self.values.iter().filter_map(|row| Self::row_time(row)).collect()
    }

    /// Largest value in `column`, `0.0` for an empty series.
    pub fn max_value(&self, column: usize) -> f64 {
        max_of_column(&self.values, column)
    }

    pub fn try_max_value(&self, column: usize) -> Option<f64> {
        try_max_of_column(&self.values, column)
    }

    /// Index into `values` of the row whose timestamp is closest to `at`.
    /// Rows must be in ascending time order.
    ///
    /// Rows without a usable time cell (missing, NaN or infinite) never
    /// match. They are expected only at the edges of the table: leading ones
    /// order before every timestamp and trailing ones are ignored; one in the
    /// middle breaks the ordering the search relies on.
    pub fn closest_row(&self, at: impl Into<PointInTime>) -> Option<usize> {
        let end = self.values.iter().rposition(|row| Self::row_time(row).is_some())? + 1;
        let timed = &self.values[..end];
        let row = find_closest_by(timed, at, |row| Self::row_time(row).unwrap_or(PointInTime::MIN))?;
        Self::row_time(&timed[row]).map(|_| row)
    }

    /// Value of `column` in the row closest to `at`. This is the lookup the
    /// colour-axis labels use to spot sentinel rows.
    pub fn value_near(&self, at: impl Into<PointInTime>, column: usize) -> Option<f64> {
        let row = self.closest_row(at)?;
        self.values.get(row)?.get(column).copied()
    }
}

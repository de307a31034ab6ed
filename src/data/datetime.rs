use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};
use crate::time::point::PointInTime;

/// Date and date-time layouts accepted on the command line, tried in order
/// after RFC 3339 and plain epoch milliseconds. All are read as UTC.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
];

/// Parse a textual timestamp into a [`PointInTime`].
///
/// Accepts RFC 3339 (`2024-05-15T13:45:07.250Z`), an integer count of epoch
/// milliseconds (`1715780707250`, may be negative), or any of
/// [`DATE_FORMATS`].
pub fn parse_point_in_time(value: &str) -> Result<PointInTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.into());
    }
    if let Ok(millis) = value.parse::<i64>() {
        return Ok(PointInTime::from_millis(millis));
    }

    for &fmt in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt.into());
        }
        if let Ok(d) = NaiveDate::parse_from_str(value, fmt) {
            if let Some(dt) = d.and_hms_opt(0, 0, 0) {
                return Ok(dt.into());
            }
        }
    }

    Err(Error::UnparsableTimestamp(value.to_string()))
}

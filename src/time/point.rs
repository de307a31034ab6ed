use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An absolute instant, stored as milliseconds since the Unix epoch (UTC).
///
/// Every input form the chart hands us (chrono instants, epoch
/// milliseconds, `SystemTime`, or anything implementing [`EpochValue`])
/// normalizes to exactly one `PointInTime`, so the formatting and search
/// code only ever deals with this one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointInTime(i64);

impl PointInTime {
    pub const EPOCH: Self = Self(0);
    /// Earliest representable instant; orders before every real timestamp.
    pub const MIN: Self = Self(i64::MIN);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Normalize any value exposing a numeric epoch-milliseconds view.
    pub fn from_value<V: EpochValue + ?Sized>(value: &V) -> Self {
        Self::from(value.epoch_millis())
    }

    /// The instant as a chrono UTC datetime, or `None` when it lies outside
    /// chrono's representable range.
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    pub fn abs_diff(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }
}

/// A value that can report itself as (possibly fractional) milliseconds
/// since the Unix epoch.
pub trait EpochValue {
    fn epoch_millis(&self) -> f64;
}

impl EpochValue for PointInTime {
    fn epoch_millis(&self) -> f64 {
        self.0 as f64
    }
}

impl EpochValue for i64 {
    fn epoch_millis(&self) -> f64 {
        *self as f64
    }
}

impl EpochValue for f64 {
    fn epoch_millis(&self) -> f64 {
        *self
    }
}

impl<Tz: TimeZone> EpochValue for DateTime<Tz> {
    fn epoch_millis(&self) -> f64 {
        self.timestamp_millis() as f64
    }
}

impl EpochValue for SystemTime {
    fn epoch_millis(&self) -> f64 {
        system_time_millis(*self) as f64
    }
}

impl From<i64> for PointInTime {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

/// Fractional milliseconds are truncated toward zero. NaN maps to the epoch
/// and values beyond `i64` saturate, so the conversion never fails.
impl From<f64> for PointInTime {
    fn from(millis: f64) -> Self {
        Self(millis.trunc() as i64)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for PointInTime {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.timestamp_millis())
    }
}

/// Naive datetimes are read as UTC.
impl From<NaiveDateTime> for PointInTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt.and_utc().timestamp_millis())
    }
}

impl From<SystemTime> for PointInTime {
    fn from(t: SystemTime) -> Self {
        Self(system_time_millis(t))
    }
}

fn system_time_millis(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|ms| -ms)
            .unwrap_or(i64::MIN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use std::time::Duration;

    #[test]
    fn test_every_input_form_agrees() {
        let utc = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        let expected = PointInTime::from_millis(utc.timestamp_millis());

        let offset = utc.with_timezone(&FixedOffset::east_opt(5 * 3600).unwrap());
        let naive = NaiveDate::from_ymd_opt(2021, 3, 4)
            .unwrap()
            .and_hms_opt(5, 6, 7)
            .unwrap();
        let system = UNIX_EPOCH + Duration::from_millis(expected.millis() as u64);

        assert_eq!(PointInTime::from(utc), expected);
        assert_eq!(PointInTime::from(offset), expected);
        assert_eq!(PointInTime::from(naive), expected);
        assert_eq!(PointInTime::from(system), expected);
        assert_eq!(PointInTime::from(expected.millis()), expected);
        assert_eq!(PointInTime::from(expected.millis() as f64), expected);
        assert_eq!(PointInTime::from_value(&utc), expected);
    }

    #[test]
    fn test_fractional_and_degenerate_floats() {
        assert_eq!(PointInTime::from(1.9).millis(), 1);
        assert_eq!(PointInTime::from(-1.9).millis(), -1);
        assert_eq!(PointInTime::from(f64::NAN), PointInTime::EPOCH);
        assert_eq!(PointInTime::from(f64::INFINITY).millis(), i64::MAX);
    }

    #[test]
    fn test_pre_epoch_system_time() {
        let t = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(PointInTime::from(t).millis(), -1500);
    }

    #[test]
    fn test_custom_epoch_value() {
        struct Sample {
            seconds: f64,
        }
        impl EpochValue for Sample {
            fn epoch_millis(&self) -> f64 {
                self.seconds * 1000.0
            }
        }
        let p = PointInTime::from_value(&Sample { seconds: 2.5 });
        assert_eq!(p.millis(), 2500);
    }

    #[test]
    fn test_serde_is_plain_millis() {
        let p = PointInTime::from_millis(1234);
        assert_eq!(serde_json::to_string(&p).unwrap(), "1234");
        let back: PointInTime = serde_json::from_str("1234").unwrap();
        assert_eq!(back, p);
    }
}

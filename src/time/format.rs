use chrono::{FixedOffset, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::calendar::CalendarUnit;
use super::point::PointInTime;

/// Which calendar granularity a tick label is rendered at.
///
/// The granularity names the finest unit the label has to show: an instant
/// sitting exactly on an hour (but not a day) boundary is labelled at
/// `Hour` granularity, `15 May 03:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelGranularity {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl LabelGranularity {
    /// Pick the coarsest label that still tells `t` apart from the start of
    /// its containing unit.
    pub fn of(t: NaiveDateTime) -> Self {
        if CalendarUnit::Second.is_finer_than(t) {
            LabelGranularity::Millisecond
        } else if CalendarUnit::Minute.is_finer_than(t) {
            LabelGranularity::Second
        } else if CalendarUnit::Hour.is_finer_than(t) {
            LabelGranularity::Minute
        } else if CalendarUnit::Day.is_finer_than(t) {
            LabelGranularity::Hour
        } else if CalendarUnit::Month.is_finer_than(t) {
            if CalendarUnit::Week.is_finer_than(t) {
                LabelGranularity::Day
            } else {
                LabelGranularity::Week
            }
        } else if CalendarUnit::Year.is_finer_than(t) {
            LabelGranularity::Month
        } else {
            LabelGranularity::Year
        }
    }

    /// chrono `strftime` pattern for this granularity.
    pub fn pattern(self) -> &'static str {
        match self {
            LabelGranularity::Millisecond => "%H:%M:%S%.3f",
            LabelGranularity::Second => "%H:%M:%S",
            LabelGranularity::Minute => "%H:%M",
            LabelGranularity::Hour => "%d %b %H:%M",
            LabelGranularity::Day => "%d %b",
            LabelGranularity::Week => "%d %b",
            LabelGranularity::Month => "%d %B",
            LabelGranularity::Year => "%Y",
        }
    }
}

/// Time zone whose wall clock the labels are computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelZone {
    #[default]
    Utc,
    Local,
    Fixed { offset_seconds: i32 },
}

impl LabelZone {
    /// Wall-clock time of `instant` in this zone, or `None` when the instant
    /// is outside chrono's range.
    pub fn wall_clock(self, instant: PointInTime) -> Option<NaiveDateTime> {
        let utc = instant.to_utc()?;
        let naive = match self {
            LabelZone::Utc => utc.naive_utc(),
            LabelZone::Local => utc.with_timezone(&Local).naive_local(),
            LabelZone::Fixed { offset_seconds } => match FixedOffset::east_opt(offset_seconds) {
                Some(offset) => utc.with_timezone(&offset).naive_local(),
                None => utc.naive_utc(),
            },
        };
        Some(naive)
    }
}

/// Adaptive tick-label formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLabelFormatter {
    zone: LabelZone,
}

impl TimeLabelFormatter {
    pub fn new(zone: LabelZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> LabelZone {
        self.zone
    }

    pub fn granularity(&self, instant: impl Into<PointInTime>) -> Option<LabelGranularity> {
        self.zone.wall_clock(instant.into()).map(LabelGranularity::of)
    }

    /// Format `instant` at the granularity picked by [`LabelGranularity::of`].
    /// Instants chrono cannot represent fall back to their raw millisecond
    /// count, so the label is never empty.
    pub fn format(&self, instant: impl Into<PointInTime>) -> String {
        let instant = instant.into();
        match self.zone.wall_clock(instant) {
            Some(t) => t.format(LabelGranularity::of(t).pattern()).to_string(),
            None => instant.millis().to_string(),
        }
    }
}

/// Format a tick label in UTC.
pub fn format_label(instant: impl Into<PointInTime>) -> String {
    TimeLabelFormatter::default().format(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ms(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, milli: u32) -> PointInTime {
        let dt = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
        PointInTime::from_millis(dt.timestamp_millis() + i64::from(milli))
    }

    #[test]
    fn test_ladder() {
        let cases = [
            (ms(2024, 5, 15, 13, 45, 7, 250), "13:45:07.250"),
            (ms(2024, 5, 15, 13, 45, 7, 0), "13:45:07"),
            (ms(2024, 5, 15, 13, 45, 0, 0), "13:45"),
            (ms(2024, 5, 15, 3, 0, 0, 0), "15 May 03:00"),
            // Wednesday midnight
            (ms(2024, 5, 15, 0, 0, 0, 0), "15 May"),
            // Sunday midnight
            (ms(2024, 5, 12, 0, 0, 0, 0), "12 May"),
            (ms(2024, 3, 1, 0, 0, 0, 0), "01 March"),
            (ms(2024, 1, 1, 0, 0, 0, 0), "2024"),
        ];
        for (instant, expected) in cases {
            assert_eq!(format_label(instant), expected);
        }
    }

    #[test]
    fn test_granularity_week_vs_day() {
        let f = TimeLabelFormatter::default();
        assert_eq!(f.granularity(ms(2024, 5, 12, 0, 0, 0, 0)), Some(LabelGranularity::Week));
        assert_eq!(f.granularity(ms(2024, 5, 15, 0, 0, 0, 0)), Some(LabelGranularity::Day));
    }

    #[test]
    fn test_hour_boundary_uses_day_month_form() {
        let three_am = ms(2023, 8, 9, 3, 0, 0, 0);
        assert_eq!(format_label(three_am), "09 Aug 03:00");
    }

    #[test]
    fn test_epoch_origin() {
        assert_eq!(format_label(PointInTime::EPOCH), "1970");
        assert_eq!(format_label(-1i64), "23:59:59.999");
    }

    #[test]
    fn test_fixed_zone_shifts_the_ladder() {
        // Midnight UTC on New Year is 01:00 one hour east.
        let f = TimeLabelFormatter::new(LabelZone::Fixed { offset_seconds: 3600 });
        assert_eq!(f.format(ms(2024, 1, 1, 0, 0, 0, 0)), "01 Jan 01:00");
        assert_eq!(f.format(ms(2023, 12, 31, 23, 0, 0, 0)), "2024");
    }

    #[test]
    fn test_out_of_range_falls_back_to_millis() {
        assert_eq!(format_label(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_zone_config_shape() {
        let zone: LabelZone = serde_json::from_str(r#"{"fixed":{"offset_seconds":-7200}}"#).unwrap();
        assert_eq!(zone, LabelZone::Fixed { offset_seconds: -7200 });
        let zone: LabelZone = serde_json::from_str(r#""local""#).unwrap();
        assert_eq!(zone, LabelZone::Local);
    }
}

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Calendar units a wall-clock time can be floored to, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarUnit {
    Second,
    Minute,
    Hour,
    Day,
    /// Weeks start on Sunday.
    Week,
    Month,
    Year,
}

impl CalendarUnit {
    pub const ALL: [CalendarUnit; 7] = [
        CalendarUnit::Second,
        CalendarUnit::Minute,
        CalendarUnit::Hour,
        CalendarUnit::Day,
        CalendarUnit::Week,
        CalendarUnit::Month,
        CalendarUnit::Year,
    ];

    /// Start of the unit containing `t`.
    ///
    /// Returns `t` unchanged in the degenerate case where the floor would
    /// fall outside chrono's date range (a week floor at the minimum date).
    pub fn floor(self, t: NaiveDateTime) -> NaiveDateTime {
        let date = t.date();
        let floored = match self {
            CalendarUnit::Second => t.with_nanosecond(0),
            CalendarUnit::Minute => {
                NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).map(|time| date.and_time(time))
            }
            CalendarUnit::Hour => {
                NaiveTime::from_hms_opt(t.hour(), 0, 0).map(|time| date.and_time(time))
            }
            CalendarUnit::Day => date.and_hms_opt(0, 0, 0),
            CalendarUnit::Week => date
                .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            CalendarUnit::Month => date.with_day(1).and_then(|d| d.and_hms_opt(0, 0, 0)),
            CalendarUnit::Year => {
                NaiveDate::from_ymd_opt(date.year(), 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
            }
        };
        floored.unwrap_or(t)
    }

    /// Whether `t` carries information finer than this unit, i.e. flooring
    /// moves it.
    pub fn is_finer_than(self, t: NaiveDateTime) -> bool {
        self.floor(t) < t
    }
}

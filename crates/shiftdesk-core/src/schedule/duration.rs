//! Shift-hour and day-count arithmetic.
//!
//! Reversed inputs are not rejected here: `shift_hours` goes negative when
//! `end` precedes `start` (no overnight wrap), and `days_between` counts the
//! absolute span so argument order does not matter.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::ScheduleError;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A wall-clock time with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time, rejecting hours above 23 or minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Only for compile-time fixtures with known-valid values.
    pub(crate) const fn from_parts(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour as u32, self.minute as u32, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    /// Parses 24-hour `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self::from)
            .map_err(|_| ScheduleError::InvalidTime(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Paid hours between two times on the same day, minus an unpaid break.
///
/// `((end - start) in minutes - break_minutes) / 60`. No wrap-around: an
/// `end` before `start` gives a negative result.
pub fn shift_hours(start: TimeOfDay, end: TimeOfDay, break_minutes: u32) -> f64 {
    let worked =
        end.minutes_since_midnight() - start.minutes_since_midnight() - break_minutes as i64;
    worked as f64 / 60.0
}

/// Inclusive count of calendar days from `start` to `end`.
///
/// Both endpoints count, so a single-day range is 1. Symmetric in its
/// arguments.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// Inclusive day count for timestamps: partial days round up.
///
/// `ceil(|end - start| / 1 day) + 1`.
pub fn days_spanned(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let millis = (end - start).num_milliseconds().abs() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64 + 1
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ScheduleError::InvalidDate(s.to_string()))
}

/// Parse an ISO `YYYY-MM-DDTHH:MM[:SS]` local timestamp.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, ScheduleError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| ScheduleError::InvalidDate(s.to_string()))
}

/// A same-day work interval with an optional unpaid break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(default)]
    pub break_minutes: u32,
}

impl ShiftInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay, break_minutes: u32) -> Self {
        Self {
            start,
            end,
            break_minutes,
        }
    }

    pub fn hours(&self) -> f64 {
        shift_hours(self.start, self.end, self.break_minutes)
    }
}

/// A range of calendar dates, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn days(&self) -> i64 {
        days_between(self.start, self.end)
    }

    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let (lo, hi) = if self.is_reversed() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };
        lo <= date && date <= hi
    }
}

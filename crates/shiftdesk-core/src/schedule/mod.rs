//! Scheduling arithmetic: shift hours, inclusive day counts, the demo shift
//! generator and time-off requests.
//!
//! Everything here is a pure function of its inputs. Anything that depends on
//! "now" takes the instant as an argument.
//!
//! ```ignore
//! use shiftdesk_core::schedule::{days_between, parse_date, shift_hours, TimeOfDay};
//!
//! let hours = shift_hours("08:00".parse()?, "16:00".parse()?, 30); // 7.5
//! let days = days_between(parse_date("2024-12-25")?, parse_date("2024-12-27")?); // 3
//! ```

mod duration;
mod generator;
mod time_off;

use chrono::NaiveDate;
use thiserror::Error;

pub use duration::{
    days_between, days_spanned, parse_date, parse_datetime, shift_hours, DateRange,
    ShiftInterval, TimeOfDay,
};
pub use generator::{
    generate_shifts_for_days, Shift, ShiftGenerator, ShiftStatus, ShiftTemplate, Worker,
    NO_SHOW_EVERY, ROSTER, SHIFTS_PER_DAY, TEMPLATES,
};
pub use time_off::{approved_days, TimeOffKind, TimeOffRequest, TimeOffStatus};

/// Errors from schedule parsing and time-off transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Invalid time of day: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Date range ends ({end}) before it starts ({start})")]
    ReversedRange { start: NaiveDate, end: NaiveDate },

    #[error("Cannot move a {from:?} request to {to:?}")]
    InvalidTransition { from: TimeOffStatus, to: TimeOffStatus },
}

//! Deterministic demo schedule.
//!
//! Generates shifts by walking a fixed roster and a fixed set of shift
//! templates with modular index arithmetic. There is no randomness, so the
//! same `(start_date, days, now)` always yields the same shifts.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::duration::{shift_hours, TimeOfDay};

/// Shifts generated per calendar day.
pub const SHIFTS_PER_DAY: u32 = 3;

/// Every Nth past shift, by generation index, is marked a no-show.
pub const NO_SHOW_EVERY: u32 = 10;

/// A worker on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Worker {
    pub id: u32,
    pub name: &'static str,
}

/// A reusable shift shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTemplate {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub break_minutes: u32,
    pub job: &'static str,
}

pub const ROSTER: [Worker; 6] = [
    Worker { id: 1, name: "Maria Santos" },
    Worker { id: 2, name: "James Chen" },
    Worker { id: 3, name: "Aisha Patel" },
    Worker { id: 4, name: "David Kim" },
    Worker { id: 5, name: "Sofia Rodriguez" },
    Worker { id: 6, name: "Marcus Johnson" },
];

pub const TEMPLATES: [ShiftTemplate; 4] = [
    ShiftTemplate {
        start: TimeOfDay::from_parts(6, 0),
        end: TimeOfDay::from_parts(14, 0),
        break_minutes: 30,
        job: "Barista",
    },
    ShiftTemplate {
        start: TimeOfDay::from_parts(9, 0),
        end: TimeOfDay::from_parts(17, 0),
        break_minutes: 30,
        job: "Cashier",
    },
    ShiftTemplate {
        start: TimeOfDay::from_parts(14, 0),
        end: TimeOfDay::from_parts(22, 0),
        break_minutes: 30,
        job: "Shift Lead",
    },
    ShiftTemplate {
        start: TimeOfDay::from_parts(10, 0),
        end: TimeOfDay::from_parts(16, 0),
        break_minutes: 0,
        job: "Stock Associate",
    },
];

/// Where a shift stands relative to the generation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftStatus {
    /// On a past date and worked.
    Completed,
    /// On a past date and missed.
    NoShow,
    /// Today, and the generation instant falls inside the shift.
    ClockedIn,
    /// Today before/after the window, or a future date.
    Scheduled,
}

/// A generated shift record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: u32,
    pub date: NaiveDate,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub break_minutes: u32,
    pub worker_id: u32,
    pub worker_name: String,
    pub job: String,
    pub status: ShiftStatus,
}

impl Shift {
    /// Paid hours for this shift.
    pub fn hours(&self) -> f64 {
        shift_hours(self.start, self.end, self.break_minutes)
    }
}

/// Restartable iterator over generated shifts.
///
/// Cloning the generator before iterating gives an independent replay.
#[derive(Debug, Clone)]
pub struct ShiftGenerator {
    start_date: NaiveDate,
    total: u32,
    now: NaiveDateTime,
    index: u32,
}

impl ShiftGenerator {
    pub fn new(start_date: NaiveDate, days: u32, now: NaiveDateTime) -> Self {
        Self {
            start_date,
            total: days.saturating_mul(SHIFTS_PER_DAY),
            now,
            index: 0,
        }
    }

    fn shift_at(&self, index: u32) -> Option<Shift> {
        let day = index / SHIFTS_PER_DAY;
        let slot = index % SHIFTS_PER_DAY;
        let date = self.start_date.checked_add_days(Days::new(day as u64))?;

        let worker = ROSTER[index as usize % ROSTER.len()];
        let template = TEMPLATES[(day + slot) as usize % TEMPLATES.len()];

        Some(Shift {
            id: index + 1,
            date,
            start: template.start,
            end: template.end,
            break_minutes: template.break_minutes,
            worker_id: worker.id,
            worker_name: worker.name.to_string(),
            job: template.job.to_string(),
            status: classify(index, date, &template, self.now),
        })
    }
}

impl Iterator for ShiftGenerator {
    type Item = Shift;

    fn next(&mut self) -> Option<Shift> {
        if self.index >= self.total {
            return None;
        }
        let shift = self.shift_at(self.index);
        // Past the end of the calendar: stop for good
        self.index = if shift.is_some() { self.index + 1 } else { self.total };
        shift
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.total - self.index) as usize))
    }
}

/// Generate `days` days of shifts starting at `start_date`.
///
/// Status is judged against `now`: shifts on earlier dates are completed,
/// except every tenth by generation index (the 10th, 20th, ...) which is a
/// no-show; shifts today are clocked-in while `now` is inside the window.
pub fn generate_shifts_for_days(
    start_date: NaiveDate,
    days: u32,
    now: NaiveDateTime,
) -> Vec<Shift> {
    ShiftGenerator::new(start_date, days, now).collect()
}

fn classify(
    index: u32,
    date: NaiveDate,
    template: &ShiftTemplate,
    now: NaiveDateTime,
) -> ShiftStatus {
    let today = now.date();

    if date < today {
        if (index + 1) % NO_SHOW_EVERY == 0 {
            ShiftStatus::NoShow
        } else {
            ShiftStatus::Completed
        }
    } else if date == today {
        let start = date.and_time(template.start.to_naive_time());
        let end = date.and_time(template.end.to_naive_time());
        if start <= now && now < end {
            ShiftStatus::ClockedIn
        } else {
            ShiftStatus::Scheduled
        }
    } else {
        ShiftStatus::Scheduled
    }
}

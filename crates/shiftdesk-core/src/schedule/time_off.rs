//! Time-off requests and their approval lifecycle.
//!
//! ```text
//! Pending ──approve──▶ Approved ──cancel──▶ Cancelled
//!    │ └────deny────▶ Denied
//!    └──────cancel──────────────────────▶ Cancelled
//! ```
//!
//! Requests are values: each transition consumes the request and returns
//! the updated one.

use serde::{Deserialize, Serialize};

use super::duration::DateRange;
use super::ScheduleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOffKind {
    Vacation,
    Sick,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOffStatus {
    Pending,
    Approved,
    Denied,
    Cancelled,
}

impl TimeOffStatus {
    /// Whether a request may move from `self` to `next`.
    pub fn can_transition_to(self, next: TimeOffStatus) -> bool {
        use TimeOffStatus::*;
        matches!(
            (self, next),
            (Pending, Approved) | (Pending, Denied) | (Pending, Cancelled) | (Approved, Cancelled)
        )
    }

    /// Denied and cancelled requests never change again.
    pub fn is_final(self) -> bool {
        matches!(self, TimeOffStatus::Denied | TimeOffStatus::Cancelled)
    }
}

/// A worker's request for a range of days off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffRequest {
    pub id: u32,
    pub worker_id: u32,
    pub kind: TimeOffKind,
    pub range: DateRange,
    pub note: Option<String>,
    pub status: TimeOffStatus,
}

impl TimeOffRequest {
    /// Create a pending request. A range ending before it starts is rejected.
    pub fn new(
        id: u32,
        worker_id: u32,
        kind: TimeOffKind,
        range: DateRange,
    ) -> Result<Self, ScheduleError> {
        if range.is_reversed() {
            return Err(ScheduleError::ReversedRange {
                start: range.start,
                end: range.end,
            });
        }

        Ok(Self {
            id,
            worker_id,
            kind,
            range,
            note: None,
            status: TimeOffStatus::Pending,
        })
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Inclusive number of days requested.
    pub fn days(&self) -> i64 {
        self.range.days()
    }

    pub fn approve(self) -> Result<Self, ScheduleError> {
        self.transition(TimeOffStatus::Approved)
    }

    pub fn deny(self) -> Result<Self, ScheduleError> {
        self.transition(TimeOffStatus::Denied)
    }

    pub fn cancel(self) -> Result<Self, ScheduleError> {
        self.transition(TimeOffStatus::Cancelled)
    }

    fn transition(mut self, next: TimeOffStatus) -> Result<Self, ScheduleError> {
        if !self.status.can_transition_to(next) {
            return Err(ScheduleError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(self)
    }
}

/// Total days across approved requests.
pub fn approved_days(requests: &[TimeOffRequest]) -> i64 {
    requests
        .iter()
        .filter(|r| r.status == TimeOffStatus::Approved)
        .map(TimeOffRequest::days)
        .sum()
}

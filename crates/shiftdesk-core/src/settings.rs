//! Notification preferences and the rows a settings screen shows.
//!
//! [`NotificationSettings`] is an immutable record: toggling a topic returns
//! a new record, and persisting it is the host's job. [`SettingsRow`] is
//! the tagged row model each screen renders from.

use serde::{Deserialize, Serialize};

use crate::schedule::{Shift, ShiftStatus, TimeOffKind, TimeOffRequest, TimeOffStatus};

/// Something a worker can be notified about, or a delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationTopic {
    ShiftReminders,
    ScheduleChanges,
    TimeOffUpdates,
    TaskAssignments,
    Payroll,
    Push,
    Email,
    Sms,
}

impl NotificationTopic {
    pub const ALL: [NotificationTopic; 8] = [
        NotificationTopic::ShiftReminders,
        NotificationTopic::ScheduleChanges,
        NotificationTopic::TimeOffUpdates,
        NotificationTopic::TaskAssignments,
        NotificationTopic::Payroll,
        NotificationTopic::Push,
        NotificationTopic::Email,
        NotificationTopic::Sms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationTopic::ShiftReminders => "Shift reminders",
            NotificationTopic::ScheduleChanges => "Schedule changes",
            NotificationTopic::TimeOffUpdates => "Time-off updates",
            NotificationTopic::TaskAssignments => "Task assignments",
            NotificationTopic::Payroll => "Payroll",
            NotificationTopic::Push => "Push notifications",
            NotificationTopic::Email => "Email",
            NotificationTopic::Sms => "SMS",
        }
    }
}

/// Which notifications are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    pub shift_reminders: bool,
    pub schedule_changes: bool,
    pub time_off_updates: bool,
    pub task_assignments: bool,
    pub payroll: bool,
    pub push: bool,
    pub email: bool,
    pub sms: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            shift_reminders: true,
            schedule_changes: true,
            time_off_updates: true,
            task_assignments: true,
            payroll: false,
            push: true,
            email: true,
            sms: false,
        }
    }
}

impl NotificationSettings {
    pub fn is_enabled(&self, topic: NotificationTopic) -> bool {
        match topic {
            NotificationTopic::ShiftReminders => self.shift_reminders,
            NotificationTopic::ScheduleChanges => self.schedule_changes,
            NotificationTopic::TimeOffUpdates => self.time_off_updates,
            NotificationTopic::TaskAssignments => self.task_assignments,
            NotificationTopic::Payroll => self.payroll,
            NotificationTopic::Push => self.push,
            NotificationTopic::Email => self.email,
            NotificationTopic::Sms => self.sms,
        }
    }

    /// Copy of these settings with `topic` set to `enabled`.
    pub fn with(mut self, topic: NotificationTopic, enabled: bool) -> Self {
        let slot = match topic {
            NotificationTopic::ShiftReminders => &mut self.shift_reminders,
            NotificationTopic::ScheduleChanges => &mut self.schedule_changes,
            NotificationTopic::TimeOffUpdates => &mut self.time_off_updates,
            NotificationTopic::TaskAssignments => &mut self.task_assignments,
            NotificationTopic::Payroll => &mut self.payroll,
            NotificationTopic::Push => &mut self.push,
            NotificationTopic::Email => &mut self.email,
            NotificationTopic::Sms => &mut self.sms,
        };
        *slot = enabled;
        self
    }

    /// Copy of these settings with `topic` flipped.
    pub fn toggled(self, topic: NotificationTopic) -> Self {
        let current = self.is_enabled(topic);
        self.with(topic, !current)
    }
}

/// One row on a settings or profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SettingsRow {
    /// Label with a plain value.
    Text { label: String, value: String },
    /// Label with a short status badge.
    Badge { label: String, badge: String },
    /// Label with an on/off switch bound to a topic.
    Toggle {
        topic: NotificationTopic,
        label: String,
        enabled: bool,
    },
}

/// Toggle rows for every notification topic, in display order.
pub fn notification_rows(settings: &NotificationSettings) -> Vec<SettingsRow> {
    NotificationTopic::ALL
        .iter()
        .map(|&topic| SettingsRow::Toggle {
            topic,
            label: topic.label().to_string(),
            enabled: settings.is_enabled(topic),
        })
        .collect()
}

/// Badge rows for a worker's time-off requests.
pub fn time_off_rows(requests: &[TimeOffRequest]) -> Vec<SettingsRow> {
    requests
        .iter()
        .map(|req| {
            let days = req.days();
            SettingsRow::Badge {
                label: format!(
                    "{} · {} {}",
                    kind_label(req.kind),
                    days,
                    if days == 1 { "day" } else { "days" }
                ),
                badge: status_label(req.status).to_string(),
            }
        })
        .collect()
}

/// Text row summing paid hours for shifts that are not no-shows.
pub fn hours_summary_row(label: &str, shifts: &[Shift]) -> SettingsRow {
    let hours: f64 = shifts
        .iter()
        .filter(|s| s.status != ShiftStatus::NoShow)
        .map(Shift::hours)
        .sum();
    SettingsRow::Text {
        label: label.to_string(),
        value: format!("{hours:.1} h"),
    }
}

fn kind_label(kind: TimeOffKind) -> &'static str {
    match kind {
        TimeOffKind::Vacation => "Vacation",
        TimeOffKind::Sick => "Sick leave",
        TimeOffKind::Personal => "Personal",
    }
}

fn status_label(status: TimeOffStatus) -> &'static str {
    match status {
        TimeOffStatus::Pending => "Pending",
        TimeOffStatus::Approved => "Approved",
        TimeOffStatus::Denied => "Denied",
        TimeOffStatus::Cancelled => "Cancelled",
    }
}

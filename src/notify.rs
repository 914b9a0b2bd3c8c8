//! Timed text notifications.
//!
//! The queue is clock-agnostic: callers pass the current local wall-clock
//! time into `schedule` and `poll`, typically from a periodic UI timer.

use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use tracing::debug;

/// How the picked `hh:mm:ss` value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationMode {
    /// Fire after the picked duration.
    #[default]
    Timeout,
    /// Fire today at the picked wall-clock time.
    FixedTime,
}

impl NotificationMode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Timeout => Self::FixedTime,
            Self::FixedTime => Self::Timeout,
        }
    }

    #[must_use]
    pub fn indicator_text(self) -> &'static str {
        match self {
            Self::Timeout => "Timeout (hh:mm:ss)",
            Self::FixedTime => "Fixed time (hh:mm:ss)",
        }
    }

    /// Picker value shown right after switching to this mode: ten seconds
    /// for timeouts, the current time for fixed-time notifications.
    #[must_use]
    pub fn default_time(self, now: NaiveDateTime) -> NaiveTime {
        match self {
            Self::Timeout => NaiveTime::from_hms_opt(0, 0, 10).unwrap_or_default(),
            Self::FixedTime => now.time().with_nanosecond(0).unwrap_or(now.time()),
        }
    }

    /// Timeouts fire one second before `now + picked`; fixed times fire on
    /// `now`'s date.
    #[must_use]
    pub fn due_time(self, now: NaiveDateTime, picked: NaiveTime) -> NaiveDateTime {
        match self {
            Self::Timeout => {
                let seconds = i64::from(picked.num_seconds_from_midnight());
                now + TimeDelta::seconds(seconds) - TimeDelta::seconds(1)
            }
            Self::FixedTime => now.date().and_time(picked),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub due: NaiveDateTime,
    pub message: String,
}

impl Notification {
    /// `"[HH:MM:SS] message"`.
    #[must_use]
    pub fn format_line(&self) -> String {
        format!("[{}] {}", self.due.format("%H:%M:%S"), self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(
        &mut self,
        now: NaiveDateTime,
        mode: NotificationMode,
        picked: NaiveTime,
        message: impl Into<String>,
    ) -> NaiveDateTime {
        let due = mode.due_time(now, picked);
        let message = message.into();
        debug!(due = %due, ?mode, "scheduled notification");
        self.pending.push(Notification { due, message });
        due
    }

    /// Removes and returns every notification due at or before `now`, in
    /// scheduling order.
    pub fn poll(&mut self, now: NaiveDateTime) -> Vec<Notification> {
        let (ready, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|notification| notification.due <= now);
        self.pending = pending;
        if !ready.is_empty() {
            debug!(
                fired = ready.len(),
                pending = self.pending.len(),
                "notifications fired"
            );
        }
        ready
    }

    #[must_use]
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Current local wall-clock time, for hosts driving the queue from a timer.
#[must_use]
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

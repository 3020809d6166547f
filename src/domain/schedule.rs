//! Promotion scheduling value types.
//!
//! A promotion is scheduled on a set of weekdays within a daily time
//! window. The constructors here are the only way to build these values,
//! so a stored schedule is always well-formed.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer, ser::SerializeSeq};
use thiserror::Error;

/// Minimum span a promotion window must cover.
pub const MIN_WINDOW_MINUTES: u16 = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeWindowError {
    #[error("time must be zero-padded HH:MM, got {0:?}")]
    BadTimeFormat(String),
    #[error("end time must be after start time")]
    EndNotAfterStart,
    #[error("window must span at least {MIN_WINDOW_MINUTES} minutes")]
    WindowTooShort,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DaysOfWeekError {
    #[error("at least one day of week is required")]
    Empty,
    #[error("day of week out of range: {0} (expected 0..=6, Sunday = 0)")]
    OutOfRange(u8),
}

/// A wall-clock time of day at minute granularity.
///
/// Ordered, so comparisons are chronological; the textual form is always
/// zero-padded `HH:MM`, which keeps it consistent with how the windows are
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Builds a time from components already known to be on the clock,
    /// e.g. fields read back from a civil datetime.
    pub(crate) const fn from_clock(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeWindowError;

    /// Parses strict zero-padded `HH:MM` (`00:00` through `23:59`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeWindowError::BadTimeFormat(s.to_string());

        let (hh, mm) = s.split_once(':').ok_or_else(bad)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(bad());
        }

        let hour: u8 = hh.parse().map_err(|_| bad())?;
        let minute: u8 = mm.parse().map_err(|_| bad())?;
        if hour > 23 || minute > 59 {
            return Err(bad());
        }

        Ok(Self { hour, minute })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A daily time window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeWindow {
    #[serde(rename = "start_time")]
    start: TimeOfDay,
    #[serde(rename = "end_time")]
    end: TimeOfDay,
}

impl TimeWindow {
    /// Builds a window, requiring `end` strictly after `start` and a span
    /// of at least [`MIN_WINDOW_MINUTES`].
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, TimeWindowError> {
        if end <= start {
            return Err(TimeWindowError::EndNotAfterStart);
        }
        if end.minutes() - start.minutes() < MIN_WINDOW_MINUTES {
            return Err(TimeWindowError::WindowTooShort);
        }
        Ok(Self { start, end })
    }

    /// Parses and validates a window from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeWindowError> {
        Self::new(start.parse()?, end.parse()?)
    }

    #[must_use]
    pub const fn start(self) -> TimeOfDay {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> TimeOfDay {
        self.end
    }

    /// Whether `time` falls within the window. Both bounds are inclusive:
    /// a window ending at 20:00 is still live at exactly 20:00.
    #[must_use]
    pub fn contains(self, time: TimeOfDay) -> bool {
        self.start <= time && time <= self.end
    }
}

/// A non-empty set of weekdays, 0 = Sunday through 6 = Saturday.
///
/// Stored as a bitmask; input order and duplicates are irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaysOfWeek(u8);

impl DaysOfWeek {
    pub fn new(days: &[u8]) -> Result<Self, DaysOfWeekError> {
        let mut mask = 0u8;
        for &day in days {
            if day > 6 {
                return Err(DaysOfWeekError::OutOfRange(day));
            }
            mask |= 1 << day;
        }
        if mask == 0 {
            return Err(DaysOfWeekError::Empty);
        }
        Ok(Self(mask))
    }

    #[must_use]
    pub const fn contains(self, day: u8) -> bool {
        day <= 6 && self.0 & (1 << day) != 0
    }

    /// Days in the set, ascending.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0u8..=6).filter(move |&day| self.contains(day))
    }
}

impl Serialize for DaysOfWeek {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for day in self.iter() {
            seq.serialize_element(&day)?;
        }
        seq.end()
    }
}

//! Wall-clock arithmetic within a single calendar day.
//!
//! Times are stored as minutes since midnight and carry no timezone or date;
//! callers pair a [`TimeOfDay`] with a `NaiveDate` whenever an absolute
//! position is needed.

use crate::error::{Result, SlotError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minutes in a full day; the exclusive upper bound for any slot end.
pub const DAY_BOUNDARY_MINUTES: i64 = 1440;

/// A wall-clock time within one day, as minutes since midnight (0-1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from a minutes-since-midnight count.
    ///
    /// # Errors
    /// `InvalidTime` when the count falls outside 0-1439.
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        if (0..DAY_BOUNDARY_MINUTES).contains(&minutes) {
            Ok(TimeOfDay(minutes as u16))
        } else {
            Err(SlotError::InvalidTime(format!(
                "{} minutes since midnight",
                minutes
            )))
        }
    }

    /// Parse a 24-hour `"HH:MM"` string. A trailing `":SS"` part is accepted
    /// and discarded, matching the wire format's second-resolution times.
    ///
    /// # Errors
    /// `InvalidTime` for anything that is not a valid wall-clock time.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTime(s.to_string());
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(invalid());
        }
        let hours: u16 = parts[0].parse().map_err(|_| invalid())?;
        let minutes: u16 = parts[1].parse().map_err(|_| invalid())?;
        if parts.len() == 3 {
            let seconds: u16 = parts[2].parse().map_err(|_| invalid())?;
            if seconds > 59 {
                return Err(invalid());
            }
        }
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }
        Ok(TimeOfDay(hours * 60 + minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    /// Truncate a `NaiveTime` to minute resolution.
    pub fn from_time(t: NaiveTime) -> Self {
        TimeOfDay((t.hour() * 60 + t.minute()) as u16)
    }

    /// The absolute position of this time on a given date.
    pub fn at(self, date: NaiveDate) -> NaiveDateTime {
        // 0-1439 minutes is always a valid hour/minute pair.
        let time = NaiveTime::from_hms_opt(u32::from(self.0 / 60), u32::from(self.0 % 60), 0)
            .unwrap_or(NaiveTime::MIN);
        date.and_time(time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.minutes()))
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimeOfDay::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Zero-padded 24-hour `"HH:MM"` for a minutes-since-midnight count.
pub fn format_minutes(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Human-readable rendering of a minute count for form labels,
/// e.g. `"45 minutes"`, `"1 hour"`, `"2 hours 30 minutes"`.
pub fn humanize_minutes(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{} minute{}", minutes, plural(minutes));
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{} hour{}", hours, plural(hours))
    } else {
        format!(
            "{} hour{} {} minute{}",
            hours,
            plural(hours),
            rest,
            plural(rest)
        )
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Shared duration/gap contract: durations strictly positive, gaps
/// non-negative. Checked before any candidate or window is produced.
pub(crate) fn check_durations(duration_minutes: i64, gap_minutes: i64) -> Result<()> {
    if duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }
    if gap_minutes < 0 {
        return Err(SlotError::InvalidGap(gap_minutes));
    }
    Ok(())
}

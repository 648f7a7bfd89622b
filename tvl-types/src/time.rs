//! Second-resolution UNIX timestamps with calendar flooring helpers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Units used for stepping and rounding timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TimeUnit {
    /// One hour.
    Hour,
    /// Six hours, aligned to 00:00, 06:00, 12:00 and 18:00 UTC.
    SixHours,
    /// One UTC day.
    Day,
}

impl TimeUnit {
    /// Length of the unit in seconds.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        match self {
            Self::Hour => 3_600,
            Self::SixHours => 6 * 3_600,
            Self::Day => 86_400,
        }
    }
}

/// A UNIX timestamp in whole seconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnixTime(i64);

impl UnixTime {
    /// Wrap a number of seconds since the UNIX epoch.
    #[must_use]
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Current wall-clock time, truncated to whole seconds.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Seconds since the UNIX epoch.
    #[must_use]
    pub const fn to_seconds(self) -> i64 {
        self.0
    }

    /// Shift by `n` units (negative values move backwards), saturating at the `i64` bounds.
    #[must_use]
    pub const fn add(self, n: i64, unit: TimeUnit) -> Self {
        Self(self.0.saturating_add(n.saturating_mul(unit.seconds())))
    }

    /// Floor to the start of the enclosing unit.
    #[must_use]
    pub const fn to_start_of(self, unit: TimeUnit) -> Self {
        Self(self.0.saturating_sub(self.0.rem_euclid(unit.seconds())))
    }

    /// Ceil to the end of the enclosing unit; already aligned timestamps are unchanged.
    ///
    /// Saturates at `i64::MAX` when the next boundary is not representable.
    #[must_use]
    pub const fn to_end_of(self, unit: TimeUnit) -> Self {
        let rem = self.0.rem_euclid(unit.seconds());
        if rem == 0 {
            self
        } else {
            Self(self.0.saturating_sub(rem).saturating_add(unit.seconds()))
        }
    }

    /// True if the timestamp converts to a calendar date.
    #[must_use]
    pub fn is_representable(self) -> bool {
        self.to_date_time().is_some()
    }

    /// True if the timestamp sits exactly on a unit boundary.
    #[must_use]
    pub const fn is_full(self, unit: TimeUnit) -> bool {
        self.0.rem_euclid(unit.seconds()) == 0
    }

    /// Convert to a `chrono` UTC datetime, if representable.
    #[must_use]
    pub fn to_date_time(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }

    /// Later of two timestamps.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }
}

impl From<DateTime<Utc>> for UnixTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }
}

impl fmt::Display for UnixTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date_time() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%SZ")),
            None => write!(f, "{}", self.0),
        }
    }
}

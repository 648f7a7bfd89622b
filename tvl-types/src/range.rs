//! Named chart ranges and their sampling resolutions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{TimeUnit, TvlError, UnixTime};

/// Named display window of a TVL chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TvlChartRange {
    /// Last 7 days.
    #[serde(rename = "7d")]
    D7,
    /// Last 30 days.
    #[serde(rename = "30d")]
    D30,
    /// Last 90 days.
    #[serde(rename = "90d")]
    D90,
    /// Last 180 days.
    #[serde(rename = "180d")]
    D180,
    /// Last 365 days.
    #[serde(rename = "1y")]
    Y1,
    /// Everything since data became available.
    #[serde(rename = "max")]
    Max,
}

impl TvlChartRange {
    /// Every named range, shortest first.
    pub const ALL: [Self; 6] = [
        Self::D7,
        Self::D30,
        Self::D90,
        Self::D180,
        Self::Y1,
        Self::Max,
    ];

    /// Sampling resolution used for this range.
    #[must_use]
    pub const fn resolution(self) -> TvlChartResolution {
        match self {
            Self::D7 => TvlChartResolution::Hourly,
            Self::D30 | Self::D90 => TvlChartResolution::SixHourly,
            Self::D180 | Self::Y1 | Self::Max => TvlChartResolution::Daily,
        }
    }

    /// Window length in days; `None` for the unbounded `max` range.
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::D7 => Some(7),
            Self::D30 => Some(30),
            Self::D90 => Some(90),
            Self::D180 => Some(180),
            Self::Y1 => Some(365),
            Self::Max => None,
        }
    }

    /// Wire label, e.g. `"30d"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D7 => "7d",
            Self::D30 => "30d",
            Self::D90 => "90d",
            Self::D180 => "180d",
            Self::Y1 => "1y",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for TvlChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TvlChartRange {
    type Err = TvlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TvlError::InvalidArg(format!("unknown chart range: {s}")))
    }
}

/// Sampling granularity of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TvlChartResolution {
    /// One point per hour.
    Hourly,
    /// One point every six hours.
    SixHourly,
    /// One point per day.
    Daily,
}

impl TvlChartResolution {
    /// Time unit separating two consecutive points.
    #[must_use]
    pub const fn step(self) -> TimeUnit {
        match self {
            Self::Hourly => TimeUnit::Hour,
            Self::SixHourly => TimeUnit::SixHours,
            Self::Daily => TimeUnit::Day,
        }
    }
}

/// Inclusive `[from, to]` window of timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// First timestamp (inclusive).
    pub from: UnixTime,
    /// Last timestamp (inclusive).
    pub to: UnixTime,
}

impl TimeRange {
    /// Build a window from its bounds.
    #[must_use]
    pub const fn new(from: UnixTime, to: UnixTime) -> Self {
        Self { from, to }
    }

    /// True when the lower bound lies after the upper bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

use std::time::Duration;

use crate::{TimeRange, TimeUnit, TvlChartRange, TvlChartResolution, UnixTime};

/// Newest timestamp a chart may include: `now` floored to the hour, minus `lag`.
#[must_use]
pub fn target_timestamp(now: UnixTime, lag: Duration) -> UnixTime {
    let lag_secs = i64::try_from(lag.as_secs()).unwrap_or(i64::MAX);
    UnixTime::new(
        now.to_start_of(TimeUnit::Hour)
            .to_seconds()
            .saturating_sub(lag_secs),
    )
}

/// Raw bounds of a named range ending at `now`.
///
/// The upper bound is `now` floored to the resolution step; the lower bound is
/// `days` before it, or `None` for the unbounded `max` range.
#[must_use]
pub fn range_with_max(
    range: TvlChartRange,
    resolution: TvlChartResolution,
    now: UnixTime,
) -> (Option<UnixTime>, UnixTime) {
    let to = now.to_start_of(resolution.step());
    let from = range.days().map(|days| to.add(-days, TimeUnit::Day));
    (from, to)
}

/// Bounds of a named range clamped to data availability.
///
/// The lower bound is never earlier than the end of the day containing
/// `since`; for unbounded ranges it is exactly that. The result may be empty
/// when `since` postdates the upper bound.
#[must_use]
pub fn adjusted_range(
    range: TvlChartRange,
    resolution: TvlChartResolution,
    since: UnixTime,
    target: UnixTime,
) -> TimeRange {
    let (from, to) = range_with_max(range, resolution, target);
    let since = since.to_end_of(TimeUnit::Day);
    let from = from.map_or(since, |f| f.max(since));
    TimeRange::new(from, to)
}

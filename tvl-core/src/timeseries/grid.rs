use crate::{TimeRange, TvlChartResolution, UnixTime};

/// Generate the ascending grid of timestamps in `range` (inclusive on both ends)
/// stepped by `resolution`.
///
/// The first point is `range.from` rounded up to the resolution step. An empty
/// range (`from > to`) yields an empty grid.
///
/// ```
/// use tvl_core::{generate_timestamps, TimeRange, TvlChartResolution, UnixTime};
///
/// let range = TimeRange::new(UnixTime::new(0), UnixTime::new(3 * 86_400));
/// let grid = generate_timestamps(range, TvlChartResolution::Daily);
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid[3], UnixTime::new(3 * 86_400));
/// ```
#[must_use]
pub fn generate_timestamps(range: TimeRange, resolution: TvlChartResolution) -> Vec<UnixTime> {
    if range.is_empty() {
        return Vec::new();
    }
    let step = resolution.step();
    let mut out = Vec::new();
    let mut cur = range.from.to_end_of(step);
    while cur <= range.to {
        out.push(cur);
        let next = cur.add(1, step);
        if next == cur {
            break;
        }
        cur = next;
    }
    out
}

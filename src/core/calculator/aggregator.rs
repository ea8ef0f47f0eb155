use crate::errors::AppResult;
use crate::models::{DayStatistics, Record};
use chrono::{DateTime, TimeZone, Utc};

/// Compute the statistics of one day's segments.
///
/// The time span is read in `tz` so it matches the calendar the segments
/// were split on.
pub fn aggregate<Tz: TimeZone>(segments: &[Record], tz: &Tz) -> AppResult<DayStatistics> {
    let mut stats = DayStatistics {
        segments: segments.len(),
        ..Default::default()
    };

    let mut first: Option<DateTime<Utc>> = None;
    let mut last: Option<DateTime<Utc>> = None;

    for seg in segments {
        if seg.is_visit() {
            stats.visits += 1;
        }

        if seg.is_activity() {
            stats.activities += 1;
            stats.total_distance_m += seg.distance_meters();

            if let Some(kind) = seg.activity_type() {
                stats.activity_types.insert(kind.to_string());
            }
        }

        let start = seg.start()?.with_timezone(&Utc);
        let end = seg.end()?.with_timezone(&Utc);

        first = Some(first.map_or(start, |f| f.min(start)));
        last = Some(last.map_or(end, |l| l.max(end)));
    }

    stats.span = first.zip(last).map(|(f, l)| {
        (
            f.with_timezone(tz).naive_local(),
            l.with_timezone(tz).naive_local(),
        )
    });

    Ok(stats)
}

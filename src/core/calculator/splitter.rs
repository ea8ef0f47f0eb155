use crate::errors::{AppError, AppResult};
use crate::models::{DateKey, PathPoint, Record};
use crate::utils::date::days_between;
use crate::utils::time::{end_of_day, format_timestamp, start_of_day};
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

/// Split `record` into one segment per calendar day (in `tz`) it overlaps.
///
/// A record that starts and ends on the same day comes back unchanged as the
/// only element. Otherwise every day from the start day to the end day is
/// emitted in ascending order, with `startTime`/`endTime` clipped to
/// `[00:00:00.000, 23:59:59.999]` of that day and `timelinePath` reduced to
/// the points the day owns.
///
/// Each path point is owned by exactly one day: the one whose half-open range
/// `[midnight, next midnight)` contains it. Points outside the record's own
/// range are dropped. A point later than `23:59:59.999` but before midnight
/// therefore stays on its day even though it lies past that segment's
/// clipped `endTime`.
pub fn split_record<Tz: TimeZone>(record: &Record, tz: &Tz) -> AppResult<Vec<(DateKey, Record)>> {
    let start_raw = record.start()?;
    let end_raw = record.end()?;

    if end_raw < start_raw {
        return Err(AppError::InvalidRecord(format!(
            "endTime {} precedes startTime {}",
            record.end_time, record.start_time
        )));
    }

    let first_day = start_raw.with_timezone(tz).date_naive();
    let last_day = end_raw.with_timezone(tz).date_naive();

    if first_day == last_day {
        return Ok(vec![(DateKey::new(first_day), record.clone())]);
    }

    let start = start_raw.with_timezone(&Utc);
    let end = end_raw.with_timezone(&Utc);
    let path = parse_path(record.timeline_path.as_deref())?;

    let mut out = Vec::new();

    for day in days_between(first_day, last_day) {
        let day_start = start_of_day(tz, day)?.with_timezone(&Utc);
        let day_end = end_of_day(tz, day)?.with_timezone(&Utc);
        let next_start = day_end + Duration::milliseconds(1);

        let clipped_start = day_start.max(start);
        let clipped_end = day_end.min(end);
        let is_last = day == last_day;

        let timeline_path = path.as_ref().map(|points| {
            points
                .iter()
                .filter(|(t, _)| {
                    let below_limit = if is_last { *t <= end } else { *t < next_start };
                    *t >= clipped_start && below_limit
                })
                .map(|(_, p)| PathPoint::clone(p))
                .collect()
        });

        let start_time = if clipped_start == start {
            record.start_time.clone()
        } else {
            render_in(clipped_start, start_raw.offset())
        };
        let end_time = if clipped_end == end {
            record.end_time.clone()
        } else {
            render_in(clipped_end, end_raw.offset())
        };

        out.push((
            DateKey::new(day),
            record.with_range(start_time, end_time, timeline_path),
        ));
    }

    Ok(out)
}

fn parse_path(points: Option<&[PathPoint]>) -> AppResult<Option<Vec<(DateTime<Utc>, &PathPoint)>>> {
    let Some(points) = points else {
        return Ok(None);
    };

    points
        .iter()
        .map(|p| Ok((p.instant()?.with_timezone(&Utc), p)))
        .collect::<AppResult<Vec<_>>>()
        .map(Some)
}

/// Serialize a clip boundary in the UTC offset the record was written in.
fn render_in(instant: DateTime<Utc>, offset: &FixedOffset) -> String {
    format_timestamp(&instant.with_timezone(offset))
}

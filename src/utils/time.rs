//! Time utilities: timestamp parsing/serialization and local day boundaries.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, TimeZone};

/// Parse an absolute RFC 3339 timestamp as found in the export.
pub fn parse_timestamp(raw: &str) -> AppResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).map_err(|_| AppError::InvalidTimestamp(raw.to_string()))
}

/// Round-trippable form: RFC 3339 with milliseconds, `Z` for UTC.
pub fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// First instant of `date` in `tz`.
///
/// Where local midnight does not exist (DST gap) the first valid local
/// instant of the day is used; an ambiguous midnight resolves to the earlier
/// of the two instants.
pub fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> AppResult<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);

    // Gaps are at most a few hours; probe in 15 minute steps.
    for step in 0..(24 * 4) {
        let local = midnight + Duration::minutes(15 * step);
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return Ok(dt);
        }
    }

    Err(AppError::InvalidTimestamp(format!("no local start of day for {date}")))
}

/// Last representable millisecond of `date` in `tz` (23:59:59.999 local).
pub fn end_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> AppResult<DateTime<Tz>> {
    let next = date
        .succ_opt()
        .ok_or_else(|| AppError::InvalidTimestamp(format!("date out of range: {date}")))?;
    Ok(start_of_day(tz, next)? - Duration::milliseconds(1))
}

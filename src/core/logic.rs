use crate::core::calculator::aggregator;
use crate::core::index::{DayIndex, InvalidRecordPolicy};
use crate::errors::{AppError, AppResult};
use crate::models::{DateKey, DayStatistics, Record, TimelineDocument};
use chrono::TimeZone;

pub struct Core;

impl Core {
    pub fn build_index<Tz: TimeZone>(
        records: &[Record],
        tz: &Tz,
        policy: InvalidRecordPolicy,
    ) -> AppResult<DayIndex> {
        DayIndex::build(records, tz, policy)
    }

    /// Segments of `key`, or `NoRecordsForDate` when the day is empty.
    pub fn day<'a>(key: &DateKey, index: &'a DayIndex) -> AppResult<&'a [Record]> {
        index
            .get(key)
            .filter(|segs| !segs.is_empty())
            .ok_or_else(|| AppError::NoRecordsForDate(key.to_string()))
    }

    pub fn aggregate<Tz: TimeZone>(
        key: &DateKey,
        index: &DayIndex,
        tz: &Tz,
    ) -> AppResult<DayStatistics> {
        aggregator::aggregate(Self::day(key, index)?, tz)
    }

    /// One-day document in the same shape as the loaded export.
    pub fn export_day(key: &DateKey, index: &DayIndex, pretty: bool) -> AppResult<String> {
        let doc = TimelineDocument {
            semantic_segments: Self::day(key, index)?.to_vec(),
        };

        let json = if pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        };

        json.map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
    }

    /// `Timeline_2024-01-01.json` with the default prefix.
    pub fn export_file_name(prefix: &str, key: &DateKey, extension: &str) -> String {
        format!("{prefix}{key}.{extension}")
    }
}

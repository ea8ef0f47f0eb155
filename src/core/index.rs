use crate::core::calculator::split_record;
use crate::errors::AppResult;
use crate::models::{DateKey, Record};
use chrono::TimeZone;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do with a record whose timestamps or shape cannot be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRecordPolicy {
    /// Fail the whole load; no index is produced.
    #[default]
    Abort,
    /// Drop the record, log a warning and keep going.
    Skip,
}

/// DateKey → segments of that day, in input-record order then day order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayIndex {
    days: BTreeMap<DateKey, Vec<Record>>,
    records: usize,
    skipped: usize,
}

impl DayIndex {
    /// Split every record and merge the pieces by day.
    pub fn build<Tz: TimeZone>(
        records: &[Record],
        tz: &Tz,
        policy: InvalidRecordPolicy,
    ) -> AppResult<Self> {
        Self::build_from(records.iter().cloned().map(Ok), tz, policy)
    }

    /// Same as [`DayIndex::build`], but accepts records that already failed
    /// to decode so the policy applies uniformly to every record-level error.
    pub(crate) fn build_from<Tz, I>(records: I, tz: &Tz, policy: InvalidRecordPolicy) -> AppResult<Self>
    where
        Tz: TimeZone,
        I: IntoIterator<Item = AppResult<Record>>,
    {
        let mut index = DayIndex::default();

        for (i, rec) in records.into_iter().enumerate() {
            match rec.and_then(|r| split_record(&r, tz)) {
                Ok(parts) => {
                    index.records += 1;
                    for (key, segment) in parts {
                        index.days.entry(key).or_default().push(segment);
                    }
                }
                Err(e) if e.is_record_error() && policy == InvalidRecordPolicy::Skip => {
                    warn!("Skipping record #{i}: {e}");
                    index.skipped += 1;
                }
                Err(e) if e.is_record_error() => return Err(e.at_record(i)),
                Err(e) => return Err(e),
            }
        }

        debug!(
            "Index built: {} records over {} days ({} skipped)",
            index.records,
            index.days.len(),
            index.skipped
        );

        Ok(index)
    }

    pub fn get(&self, key: &DateKey) -> Option<&[Record]> {
        self.days.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        self.days.contains_key(key)
    }

    /// Days in ascending calendar order.
    pub fn keys(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[Record])> {
        self.days.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn first_day(&self) -> Option<DateKey> {
        self.days.keys().next().copied()
    }

    pub fn last_day(&self) -> Option<DateKey> {
        self.days.keys().next_back().copied()
    }

    /// Input records that made it into the index.
    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

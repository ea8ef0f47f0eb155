use crate::errors::AppResult;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Name of the top-level field holding the record collection, both in the
/// loaded export and in the per-day documents we write back.
pub const RECORDS_FIELD: &str = "semanticSegments";

/// One time-ranged entry of the location-history export.
///
/// Only the fields the splitter and the aggregator look at are typed; every
/// other key of the export lands in `extra` and is written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub start_time: String,
    pub end_time: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_path: Option<Vec<PathPoint>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Kept as a JSON number so integers are exported exactly as read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<Number>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_candidate: Option<TopCandidate>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCandidate {
    /// Category code, e.g. `WALKING` or `IN_PASSENGER_VEHICLE`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub time: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Document shape shared by the per-day export: `{ "semanticSegments": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDocument {
    #[serde(rename = "semanticSegments")]
    pub semantic_segments: Vec<Record>,
}

impl Record {
    pub fn start(&self) -> AppResult<DateTime<FixedOffset>> {
        parse_timestamp(&self.start_time)
    }

    pub fn end(&self) -> AppResult<DateTime<FixedOffset>> {
        parse_timestamp(&self.end_time)
    }

    pub fn is_visit(&self) -> bool {
        self.visit.is_some()
    }

    pub fn is_activity(&self) -> bool {
        self.activity.is_some()
    }

    /// Distance travelled in metres, zero when the record carries none.
    pub fn distance_meters(&self) -> f64 {
        self.activity
            .as_ref()
            .and_then(|a| a.distance_meters.as_ref())
            .and_then(Number::as_f64)
            .unwrap_or(0.0)
    }

    pub fn activity_type(&self) -> Option<&str> {
        self.activity
            .as_ref()
            .and_then(|a| a.top_candidate.as_ref())
            .and_then(|c| c.kind.as_deref())
            .filter(|k| !k.is_empty())
    }

    /// Build a new record with the same payload over a narrower time range.
    pub fn with_range(
        &self,
        start_time: String,
        end_time: String,
        timeline_path: Option<Vec<PathPoint>>,
    ) -> Record {
        Record {
            start_time,
            end_time,
            visit: self.visit.clone(),
            activity: self.activity.clone(),
            timeline_path,
            extra: self.extra.clone(),
        }
    }
}

impl PathPoint {
    pub fn instant(&self) -> AppResult<DateTime<FixedOffset>> {
        parse_timestamp(&self.time)
    }
}

// src/export/model.rs

use crate::models::{DateKey, Record};
use serde::Serialize;

/// Struttura “piatta” di un segmento, una riga per CSV.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SegmentExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub kind: String,
    pub activity_type: String,
    pub distance_meters: Option<f64>,
    pub path_points: usize,
}

impl SegmentExport {
    pub fn from_record(key: &DateKey, rec: &Record) -> Self {
        Self {
            date: key.to_string(),
            start_time: rec.start_time.clone(),
            end_time: rec.end_time.clone(),
            kind: segment_kind(rec).to_string(),
            activity_type: rec.activity_type().unwrap_or_default().to_string(),
            distance_meters: rec
                .activity
                .as_ref()
                .and_then(|a| a.distance_meters.as_ref())
                .and_then(|n| n.as_f64()),
            path_points: rec.timeline_path.as_ref().map_or(0, Vec::len),
        }
    }
}

fn segment_kind(rec: &Record) -> &'static str {
    if rec.is_visit() {
        "visit"
    } else if rec.is_activity() {
        "activity"
    } else if rec.timeline_path.is_some() {
        "path"
    } else {
        "other"
    }
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimeline::models::Record;
use serde_json::json;
use std::env;
use std::fs;
use std::path::PathBuf;

/// CLI handle pinned to UTC and without colored status lines.
pub fn rtl() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimeline");
    cmd.env("TZ", "UTC0").env("NO_COLOR", "1");
    cmd
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeline.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimeline_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Small export covering a visit, two activities (one across midnight UTC)
/// and a path-only record.
pub fn sample_document() -> serde_json::Value {
    json!({
        "semanticSegments": [
            {
                "startTime": "2024-01-01T08:00:00.000Z",
                "endTime": "2024-01-01T09:00:00.000Z",
                "startTimeTimezoneUtcOffsetMinutes": 0,
                "visit": {
                    "probability": "0.91",
                    "topCandidate": { "placeId": "ChIJ-home", "semanticType": "HOME" }
                }
            },
            {
                "startTime": "2024-01-01T09:00:00.000Z",
                "endTime": "2024-01-01T09:30:00.000Z",
                "activity": {
                    "start": { "latLng": "45.0°, 9.0°" },
                    "end": { "latLng": "45.1°, 9.1°" },
                    "distanceMeters": 500,
                    "topCandidate": { "type": "WALKING", "probability": "0.8" }
                }
            },
            {
                "startTime": "2024-01-01T22:00:00.000Z",
                "endTime": "2024-01-02T02:00:00.000Z",
                "activity": {
                    "distanceMeters": 1000,
                    "topCandidate": { "type": "IN_PASSENGER_VEHICLE" }
                }
            },
            {
                "startTime": "2024-01-02T05:00:00.000Z",
                "endTime": "2024-01-02T06:00:00.000Z",
                "timelinePath": [
                    { "point": "45.0°, 9.0°", "time": "2024-01-02T05:00:00.000Z" },
                    { "point": "45.2°, 9.2°", "time": "2024-01-02T05:40:00.000Z" }
                ]
            }
        ],
        "rawSignals": [],
        "userLocationProfile": {}
    })
}

pub fn sample_json() -> String {
    serde_json::to_string_pretty(&sample_document()).expect("serialize sample")
}

/// Write the sample export to a temp `.json` file and return its path
pub fn write_sample(name: &str) -> String {
    let path = temp_path(name, "json");
    fs::write(&path, sample_json()).expect("write sample export");
    path
}

/// Record with just a time range
pub fn record(start: &str, end: &str) -> Record {
    serde_json::from_value(json!({ "startTime": start, "endTime": end })).expect("record")
}

/// Record with a path made of the given point times
pub fn record_with_path(start: &str, end: &str, points: &[&str]) -> Record {
    let path: Vec<_> = points
        .iter()
        .map(|t| json!({ "point": "0.0°, 0.0°", "time": t }))
        .collect();
    serde_json::from_value(json!({ "startTime": start, "endTime": end, "timelinePath": path }))
        .expect("record with path")
}

/// Activity record with optional type and distance
pub fn activity(start: &str, end: &str, kind: Option<&str>, meters: Option<f64>) -> Record {
    let mut activity = serde_json::Map::new();
    if let Some(k) = kind {
        activity.insert("topCandidate".into(), json!({ "type": k }));
    }
    if let Some(m) = meters {
        activity.insert("distanceMeters".into(), json!(m));
    }
    serde_json::from_value(json!({ "startTime": start, "endTime": end, "activity": activity }))
        .expect("activity record")
}

pub fn visit(start: &str, end: &str) -> Record {
    serde_json::from_value(json!({
        "startTime": start,
        "endTime": end,
        "visit": { "topCandidate": { "placeId": "p" } }
    }))
    .expect("visit record")
}

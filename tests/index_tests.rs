mod common;
use chrono::Utc;
use common::{record, sample_json};
use rtimeline::core::loader::{load_index, load_records, parse_document};
use rtimeline::core::{Core, DayIndex, InvalidRecordPolicy};
use rtimeline::errors::AppError;
use rtimeline::models::{DateKey, TimelineDocument};

fn key(s: &str) -> DateKey {
    DateKey::parse(s).expect("date key")
}

#[test]
fn test_index_keeps_record_then_day_order() {
    let a = record("2024-01-01T10:00:00.000Z", "2024-01-01T11:00:00.000Z");
    let b = record("2024-01-01T22:00:00.000Z", "2024-01-02T02:00:00.000Z");
    let c = record("2024-01-02T05:00:00.000Z", "2024-01-02T06:00:00.000Z");

    let index = Core::build_index(&[a.clone(), b, c.clone()], &Utc, InvalidRecordPolicy::Abort)
        .expect("index");

    let keys: Vec<String> = index.keys().map(|k| k.to_string()).collect();
    assert_eq!(keys, vec!["2024-01-01", "2024-01-02"]);

    let jan1 = index.get(&key("2024-01-01")).unwrap();
    assert_eq!(jan1.len(), 2);
    assert_eq!(jan1[0], a);
    assert_eq!(jan1[1].start_time, "2024-01-01T22:00:00.000Z");
    assert_eq!(jan1[1].end_time, "2024-01-01T23:59:59.999Z");

    let jan2 = index.get(&key("2024-01-02")).unwrap();
    assert_eq!(jan2.len(), 2);
    assert_eq!(jan2[0].start_time, "2024-01-02T00:00:00.000Z");
    assert_eq!(jan2[1], c);

    assert_eq!(index.record_count(), 3);
    assert_eq!(index.first_day(), Some(key("2024-01-01")));
    assert_eq!(index.last_day(), Some(key("2024-01-02")));
}

#[test]
fn test_invalid_record_aborts_the_whole_build() {
    let good = record("2024-01-01T10:00:00.000Z", "2024-01-01T11:00:00.000Z");
    let bad = record("2024-01-01T10:00:00.000Z", "garbage");

    let err = DayIndex::build(&[good, bad], &Utc, InvalidRecordPolicy::Abort).unwrap_err();

    match err {
        AppError::AtRecord { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(*source, AppError::InvalidTimestamp(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_skip_policy_drops_only_the_invalid_record() {
    let good = record("2024-01-01T10:00:00.000Z", "2024-01-01T11:00:00.000Z");
    let bad = record("2024-01-01T10:00:00.000Z", "garbage");

    let index = DayIndex::build(&[bad, good], &Utc, InvalidRecordPolicy::Skip).expect("index");

    assert_eq!(index.skipped(), 1);
    assert_eq!(index.record_count(), 1);
    assert_eq!(index.len(), 1);
}

#[test]
fn test_document_parsing_errors() {
    assert!(matches!(parse_document("{ not json"), Err(AppError::Parse(_))));
    assert!(matches!(
        parse_document(r#"{"timelineObjects": []}"#),
        Err(AppError::InputShape(_))
    ));
    assert!(matches!(
        parse_document(r#"{"semanticSegments": {}}"#),
        Err(AppError::InputShape(_))
    ));
    assert!(matches!(parse_document("[]"), Err(AppError::InputShape(_))));
    assert_eq!(parse_document(r#"{"semanticSegments": []}"#).unwrap().len(), 0);
}

#[test]
fn test_record_without_start_time_fails_the_shape_check() {
    let raw = r#"{"semanticSegments": [{"endTime": "2024-01-01T10:00:00.000Z"}]}"#;

    let err = load_index(raw, &Utc, InvalidRecordPolicy::Abort).unwrap_err();
    assert!(matches!(err, AppError::AtRecord { index: 0, .. }));

    let index = load_index(raw, &Utc, InvalidRecordPolicy::Skip).expect("skip");
    assert!(index.is_empty());
    assert_eq!(index.skipped(), 1);

    assert!(load_records(raw).is_err());
}

#[test]
fn test_unknown_fields_survive_loading() {
    let records = load_records(&sample_json()).expect("records");

    assert_eq!(records.len(), 4);
    assert_eq!(
        records[0].extra.get("startTimeTimezoneUtcOffsetMinutes"),
        Some(&serde_json::json!(0))
    );
    let activity = records[1].activity.as_ref().unwrap();
    assert!(activity.extra.contains_key("start"));
    assert_eq!(
        activity.top_candidate.as_ref().unwrap().extra.get("probability"),
        Some(&serde_json::json!("0.8"))
    );
}

#[test]
fn test_export_missing_day_reports_no_records() {
    let index = load_index(&sample_json(), &Utc, InvalidRecordPolicy::Abort).expect("index");

    let err = Core::export_day(&key("2023-12-31"), &index, true).unwrap_err();

    assert!(matches!(err, AppError::NoRecordsForDate(ref d) if d == "2023-12-31"));
}

#[test]
fn test_export_round_trip_gives_back_the_same_day() {
    let index = load_index(&sample_json(), &Utc, InvalidRecordPolicy::Abort).expect("index");
    let day = key("2024-01-02");

    let exported = Core::export_day(&day, &index, true).expect("export");

    let doc: TimelineDocument = serde_json::from_str(&exported).expect("document shape");
    assert_eq!(doc.semantic_segments.len(), 2);

    let reloaded = load_index(&exported, &Utc, InvalidRecordPolicy::Abort).expect("reload");
    let keys: Vec<DateKey> = reloaded.keys().copied().collect();
    assert_eq!(keys, vec![day]);
    assert_eq!(reloaded.get(&day), index.get(&day));
}

#[test]
fn test_export_file_name_uses_prefix_and_key() {
    assert_eq!(
        Core::export_file_name("Timeline_", &key("2024-01-02"), "json"),
        "Timeline_2024-01-02.json"
    );
}

#[test]
fn test_export_keeps_unknown_keys_in_input_order() {
    let raw = r#"{"semanticSegments": [
        {"startTime": "2024-01-01T10:00:00.000Z", "endTime": "2024-01-01T11:00:00.000Z",
         "zulu": 1, "alpha": 2, "mike": 3}
    ]}"#;
    let index = load_index(raw, &Utc, InvalidRecordPolicy::Abort).expect("index");

    let exported = Core::export_day(&key("2024-01-01"), &index, false).expect("export");

    let zulu = exported.find("\"zulu\"").expect("zulu");
    let alpha = exported.find("\"alpha\"").expect("alpha");
    let mike = exported.find("\"mike\"").expect("mike");
    assert!(zulu < alpha && alpha < mike, "{exported}");
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rtl, temp_dir, temp_path, write_sample};

#[test]
fn test_days_lists_every_day() {
    let input = write_sample("cli_days");

    rtl()
        .args(["days", &input])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-01-02"))
        .stdout(contains("2 days, 4 records"))
        .stdout(contains("1.50 km"));
}

#[test]
fn test_show_prints_the_day_statistics() {
    let input = write_sample("cli_show");

    rtl()
        .args(["show", &input, "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Monday, January 1, 2024"))
        .stdout(contains("Segments:"))
        .stdout(contains("1.50 km"))
        .stdout(contains("08:00 AM - 11:59 PM"))
        .stdout(contains("In Passenger Vehicle, Walking"));
}

#[test]
fn test_show_day_without_data_fails() {
    let input = write_sample("cli_show_empty");

    rtl()
        .args(["show", &input, "2024-01-20"])
        .assert()
        .failure()
        .stderr(contains("No records found for date 2024-01-20"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let input = write_sample("cli_bad_date");

    rtl()
        .args(["show", &input, "01/01/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_non_json_file_is_rejected() {
    let input = temp_path("cli_not_json", "txt");
    fs::write(&input, "{}").unwrap();

    rtl()
        .args(["days", &input])
        .assert()
        .failure()
        .stderr(contains("Please provide a JSON file"));
}

#[test]
fn test_wrong_document_shape_is_rejected() {
    let input = temp_path("cli_wrong_shape", "json");
    fs::write(&input, r#"{"timelineObjects": []}"#).unwrap();

    rtl()
        .args(["days", &input])
        .assert()
        .failure()
        .stderr(contains("Invalid Timeline format"));
}

#[test]
fn test_calendar_marks_data_and_selection() {
    let input = write_sample("cli_calendar");

    rtl()
        .args(["calendar", &input, "--month", "2024-01", "--select", "2024-01-02"])
        .assert()
        .success()
        .stdout(contains("January 2024"))
        .stdout(contains("Sun  Mon"))
        .stdout(contains("1*"))
        .stdout(contains("[ 2]"))
        .stdout(contains("2 day(s) with data in January 2024"))
        .stdout(contains("Tuesday, January 2, 2024"));
}

#[test]
fn test_calendar_other_month_has_no_data() {
    let input = write_sample("cli_calendar_empty");

    rtl()
        .args(["calendar", &input, "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("February 2024"))
        .stdout(contains("0 day(s) with data").and(contains("*").not()));
}

#[test]
fn test_export_json_to_explicit_file() {
    let input = write_sample("cli_export_json");
    let out = temp_path("cli_export_json_out", "json");

    rtl()
        .args(["export", &input, "2024-01-02", "--out", &out])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let segments = doc["semanticSegments"].as_array().expect("records array");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["startTime"], "2024-01-02T00:00:00.000Z");
    assert_eq!(segments[0]["endTime"], "2024-01-02T02:00:00.000Z");
    assert!(doc.get("rawSignals").is_none());
}

#[test]
fn test_export_uses_configured_directory_and_prefix() {
    let dir = temp_dir("cli_export_cfg");
    let cfg = temp_path("cli_export_cfg", "conf");
    fs::write(
        &cfg,
        format!(
            "output_dir: \"{}\"\nexport_prefix: \"Day_\"\npretty_json: false\n",
            dir.display()
        ),
    )
    .unwrap();
    let input = write_sample("cli_export_cfg");

    rtl()
        .args(["--config", &cfg, "export", &input, "2024-01-01"])
        .assert()
        .success();

    let exported = dir.join("Day_2024-01-01.json");
    let content = fs::read_to_string(&exported).expect("exported file");
    assert!(content.starts_with(r#"{"semanticSegments":["#));
}

#[test]
fn test_export_csv() {
    let input = write_sample("cli_export_csv");
    let out = temp_path("cli_export_csv_out", "csv");

    rtl()
        .args(["export", &input, "2024-01-01", "--format", "csv", "--out", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,start_time,end_time,kind,activity_type,distance_meters,path_points")
    );
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("2024-01-01,2024-01-01T08:00:00.000Z,2024-01-01T09:00:00.000Z,visit,,,0"));
    assert!(content.contains("IN_PASSENGER_VEHICLE,1000.0,0"));
}

#[test]
fn test_export_day_without_data_writes_nothing() {
    let input = write_sample("cli_export_empty");
    let out = temp_path("cli_export_empty_out", "json");

    rtl()
        .args(["export", &input, "2024-02-01", "--out", &out])
        .assert()
        .failure()
        .stderr(contains("No records found for date 2024-02-01"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_refuses_to_overwrite_without_confirmation() {
    let input = write_sample("cli_export_overwrite");
    let out = temp_path("cli_export_overwrite_out", "json");
    fs::write(&out, "keep me").unwrap();

    rtl()
        .args(["export", &input, "2024-01-01", "--out", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rtl()
        .args(["export", &input, "2024-01-01", "--out", &out, "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().contains("semanticSegments"));
}

#[test]
fn test_invalid_record_aborts_unless_skipping_is_configured() {
    let input = temp_path("cli_invalid_record", "json");
    fs::write(
        &input,
        r#"{"semanticSegments": [
            {"startTime": "2024-01-01T10:00:00.000Z", "endTime": "2024-01-01T11:00:00.000Z"},
            {"startTime": "soon", "endTime": "2024-01-01T11:00:00.000Z"}
        ]}"#,
    )
    .unwrap();

    rtl()
        .args(["days", &input])
        .assert()
        .failure()
        .stderr(contains("Record #1").and(contains("Invalid timestamp: soon")));

    let cfg = temp_path("cli_invalid_record", "conf");
    fs::write(&cfg, "skip_invalid_records: true\n").unwrap();

    rtl()
        .args(["--config", &cfg, "days", &input])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stderr(contains("1 invalid record(s) skipped"));
}

#[test]
fn test_init_in_test_mode_writes_nothing() {
    let cfg = temp_path("cli_init_test", "conf");

    rtl()
        .args(["--config", &cfg, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("rTimeline initialization completed"));

    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn test_init_then_print_config() {
    let cfg = temp_path("cli_init_print", "conf");

    rtl().args(["--config", &cfg, "init"]).assert().success();
    assert!(std::path::Path::new(&cfg).exists());

    rtl()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("export_prefix: Timeline_"))
        .stdout(contains("week_start: sunday"))
        .stdout(contains("skip_invalid_records: false"));
}

#[test]
fn test_malformed_config_is_reported() {
    let cfg = temp_path("cli_bad_config", "conf");
    fs::write(&cfg, "week_start: [oops\n").unwrap();
    let input = write_sample("cli_bad_config");

    rtl()
        .args(["--config", &cfg, "days", &input])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

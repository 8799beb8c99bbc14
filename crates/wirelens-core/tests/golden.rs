use std::fs;
use std::path::{Path, PathBuf};

use wirelens_core::{CollectingSink, DiagnosticScope, MessageFamily, Normalizer, TelemetryRecord};

fn golden_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden")
        .join(name)
}

fn load_expected_record(name: &str) -> TelemetryRecord {
    let expected_path = golden_dir(name).join("expected.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected.json");
    serde_json::from_str(&expected_json).expect("parse expected record")
}

fn run_golden(name: &str) -> CollectingSink {
    let input = fs::read(golden_dir(name).join("input.bin")).expect("read input.bin");
    let expected = load_expected_record(name);

    let normalizer = Normalizer::with_sink(CollectingSink::default());
    let actual = normalizer
        .decode(expected.family(), &input)
        .unwrap_or_else(|| panic!("decode failed in {name}"));

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {name}");
    normalizer.into_sink()
}

#[test]
fn golden_compressed_image() {
    let sink = run_golden("compressed_image");
    assert!(sink.is_empty());
}

#[test]
fn golden_compressed_image_garbage_is_sentinel() {
    let sink = run_golden("compressed_image_garbage");
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.diagnostics()[0].scope, DiagnosticScope::Message);

    match load_expected_record("compressed_image_garbage") {
        TelemetryRecord::CompressedImage(image) => assert!(image.is_empty()),
        other => panic!("unexpected family {}", other.family()),
    }
}

#[test]
fn golden_network_status() {
    let sink = run_golden("network_status");
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].scope,
        DiagnosticScope::Entry {
            field: "checks",
            index: 1
        }
    );
}

#[test]
fn golden_network_status_has_unknown_names() {
    let TelemetryRecord::NetworkStatus(status) = load_expected_record("network_status") else {
        panic!("expected network status");
    };
    let names: Vec<_> = status.checks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["gateway", "api", "resolver"]);
    assert_eq!(status.checks[2].check_type_name, "UNKNOWN");
    assert_eq!(status.checks[2].status_name, "UNKNOWN");
}

#[test]
fn golden_node_list() {
    let sink = run_golden("node_list");
    assert!(sink.is_empty());
}

#[test]
fn golden_node_list_has_status_names() {
    let TelemetryRecord::NodeList(list) = load_expected_record("node_list") else {
        panic!("expected node list");
    };
    let statuses: Vec<_> = list.nodes.iter().map(|n| n.status_name.as_str()).collect();
    assert_eq!(statuses, vec!["running", "not-installed", "unknown"]);
}

#[test]
fn golden_node_event() {
    run_golden("node_event");
}

#[test]
fn golden_node_event_broken_state() {
    let sink = run_golden("node_event_broken_state");
    assert_eq!(
        sink.diagnostics()[0].scope,
        DiagnosticScope::Nested { field: "state" }
    );
}

#[test]
fn golden_current_weather() {
    run_golden("current_weather");
}

#[test]
fn golden_hourly_forecast() {
    run_golden("hourly_forecast");
}

#[test]
fn golden_daily_forecast_without_header() {
    run_golden("daily_forecast");
    let record = load_expected_record("daily_forecast");
    let TelemetryRecord::DailyForecast(forecast) = record else {
        panic!("expected daily forecast");
    };
    assert!(forecast.header.is_none());
}

#[test]
fn golden_location_config() {
    run_golden("location_config");
}

#[test]
fn golden_covers_every_family() {
    let root = golden_dir("");
    let mut covered: Vec<MessageFamily> = fs::read_dir(&root)
        .expect("read golden dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().join("expected.json").exists())
        .map(|entry| load_expected_record(&entry.file_name().to_string_lossy()).family())
        .collect();
    covered.sort_by_key(|family| family.name());
    covered.dedup();
    assert_eq!(covered.len(), MessageFamily::ALL.len());
}

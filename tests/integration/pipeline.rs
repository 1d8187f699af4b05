//! End-to-end pipeline tests

use serde_json::json;
use signalmap::config::Config;
use signalmap::core::pipeline::ClusterPipeline;
use signalmap::models::{LocationRecord, RawLocationRow};

fn rows(value: serde_json::Value) -> Vec<RawLocationRow> {
    serde_json::from_value(value).unwrap()
}

fn sample_rows() -> Vec<RawLocationRow> {
    rows(json!([
        {"device_id": "d1", "latitude": 17.4506, "longitude": 78.3871, "signal_strength": "-70", "apn_type": "Jio"},
        {"device_id": "d2", "latitude": "17.4600", "longitude": "78.3900", "signal_strength": -80, "apn_type": "Jio"},
        {"device_id": "d3", "latitude": null, "longitude": 78.39, "signal_strength": "-60", "apn_type": "Airtel"},
        {"device_id": "d4", "latitude": 17.4550, "longitude": 78.3850, "signal_strength": "n/a", "apn_type": "Airtel"},
        {"device_id": "d5", "latitude": 12.9716, "longitude": 77.5946, "signal_strength": "-90", "apn_type": "BSNL"}
    ]))
}

#[test]
fn test_report_counts_and_clusters() {
    let pipeline = ClusterPipeline::new(Config::default());
    let report = pipeline.run(&sample_rows());

    assert_eq!(report.threshold_km, 30.0);
    assert_eq!(report.total_rows, 5);
    assert_eq!(report.truncated_rows, 0);
    assert_eq!(report.valid_records, 4);
    assert_eq!(report.rejected_rows, 1);
    assert_eq!(report.clustered_records, 3);
    assert_eq!(report.unclustered_records, 1);

    assert_eq!(report.clusters.len(), 1);
    let cluster = &report.clusters[0];
    let ids: Vec<_> = cluster.members.iter().map(|m| m.device_id.as_str()).collect();
    assert_eq!(ids, vec!["d1", "d2", "d4"]);
    assert_eq!(cluster.signal_by_category["Jio"], -75.0);
    assert_eq!(cluster.signal_by_category["Airtel"], 0.0);
}

#[test]
fn test_empty_input_gives_empty_report() {
    let report = ClusterPipeline::new(Config::default()).run(&[]);
    assert_eq!(report.total_rows, 0);
    assert!(report.clusters.is_empty());
}

#[test]
fn test_input_is_truncated_to_max_records() {
    let config = Config {
        max_records: 2,
        ..Config::default()
    };
    let report = ClusterPipeline::new(config).run(&sample_rows());
    assert_eq!(report.total_rows, 5);
    assert_eq!(report.truncated_rows, 3);
    assert_eq!(report.valid_records, 2);
    assert_eq!(report.clusters.len(), 1);
}

#[test]
fn test_smaller_threshold_splits_clusters() {
    let config = Config {
        threshold_km: 0.2,
        ..Config::default()
    };
    let report = ClusterPipeline::new(config).run(&sample_rows());
    assert!(report.clusters.is_empty());
    assert_eq!(report.unclustered_records, 4);
}

#[test]
fn test_repeated_runs_serialize_identically() {
    let pipeline = ClusterPipeline::new(Config::default());
    let input = sample_rows();

    let first = serde_json::to_value(&pipeline.run(&input).clusters).unwrap();
    let second = serde_json::to_value(&pipeline.run(&input).clusters).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_run_records_skips_validation() {
    let records = vec![
        LocationRecord::new("a", 0.0, 0.0).with_category("Jio").with_signal(-50.0),
        LocationRecord::new("b", 0.0, 0.2).with_category("Jio").with_signal(-70.0),
        LocationRecord::new("c", 0.0, 0.4).with_category("Jio").with_signal(-90.0),
    ];
    let report = ClusterPipeline::new(Config::default()).run_records(&records);
    assert_eq!(report.rejected_rows, 0);
    assert_eq!(report.clusters.len(), 1);
    assert_eq!(report.clusters[0].member_count, 2);
    assert_eq!(report.clusters[0].signal_by_category["Jio"], -60.0);
}

#[test]
fn test_report_serializes_to_json() {
    let report = ClusterPipeline::new(Config::default()).run(&sample_rows());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["clusters"][0]["index"], 1);
    assert_eq!(value["clusters"][0]["members"][0]["marker_color"], "blue");
    assert!(value["generated_at"].is_string());
}

// Integration tests for aggregation and ratio computation

mod common;

use std::collections::HashMap;
use ratio_ledger::config::structs::buffers_config::BuffersConfig;
use ratio_ledger::config::structs::tracker_alias_map::TrackerAliasMap;
use ratio_ledger::config::structs::trackers_config::TrackersConfig;
use ratio_ledger::ratio::structs::tracker_ratio_row::TrackerRatioRow;
use ratio_ledger::upstream::structs::torrents_summary::TorrentsSummary;

#[test]
fn test_end_to_end_plain_snapshot() {
    // no aliases, no overrides, no prior ledger state
    let summary = TorrentsSummary::from_slice(br#"{
        "counts": {
            "trackerTransfers": {
                "a.example": {"uploaded": 1000, "downloaded": 500}
            }
        }
    }"#).unwrap();

    let rows = TrackerRatioRow::compute_rows(&summary, &TrackerAliasMap::default(), &HashMap::new());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tracker, "a.example");
    assert_eq!(rows[0].uploaded, 1000);
    assert_eq!(rows[0].downloaded, 500);
    assert_eq!(rows[0].ratio, 2.0);
    assert_eq!(rows[0].delta, 500);
}

#[test]
fn test_end_to_end_aliases_and_buffers() {
    let summary = common::create_test_summary(&[
        ("tracker.alpha.example", 100, 400),
        ("backup.alpha.example", 100, 100),
        ("solo.example", 50, 100),
    ]);
    let trackers = TrackersConfig::load(r#"
        [trackers.alpha]
        display = "Alpha"
        domains = ["tracker.alpha.example", "backup.alpha.example"]
    "#).unwrap();
    let buffers = BuffersConfig::load(r#"
        [buffers.alpha]
        uploaded_add = "1KiB"
    "#).unwrap();

    let rows = TrackerRatioRow::compute_rows(&summary, &TrackerAliasMap::from(&trackers), &buffers.overrides());
    assert_eq!(rows.len(), 2);

    let alpha = rows.iter().find(|row| row.key == "alpha").unwrap();
    assert_eq!(alpha.tracker, "Alpha");
    assert_eq!(alpha.uploaded, 200 + 1024, "two domains summed plus the buffer override");
    assert_eq!(alpha.downloaded, 500);
    assert_eq!(alpha.count, 2);

    let solo = rows.iter().find(|row| row.key == "solo.example").unwrap();
    assert_eq!(solo.uploaded, 50);
}

#[test]
fn test_ordering_with_infinite_ratio_last() {
    let summary = common::create_test_summary(&[
        ("two.example", 200, 100),
        ("inf.example", 10, 0),
        ("half.example", 50, 100),
        ("one.example", 100, 100),
    ]);
    let rows = TrackerRatioRow::compute_rows(&summary, &TrackerAliasMap::default(), &HashMap::new());
    let ratios: Vec<f64> = rows.iter().map(|row| row.ratio).collect();
    assert_eq!(&ratios[..3], &[0.5, 1.0, 2.0]);
    assert!(ratios[3].is_infinite());
}

#[test]
fn test_json_rows_null_out_infinity() {
    let summary = common::create_test_summary(&[("inf.example", 10, 0)]);
    let rows = TrackerRatioRow::compute_rows(&summary, &TrackerAliasMap::default(), &HashMap::new());
    let document = serde_json::to_value(&rows).unwrap();
    assert!(document[0]["ratio"].is_null(), "infinite ratio serializes as null for API consumers");
    assert_eq!(document[0]["uploaded"], 10);
}

#[cfg(test)]
mod ratio_tests {
    use crate::upstream::structs::torrents_summary::TorrentsSummary;

    fn summary(entries: &[(&str, u64, u64, u64, u32)]) -> TorrentsSummary {
        let mut document = TorrentsSummary::default();
        for (domain, uploaded, downloaded, total_size, count) in entries {
            document.counts.tracker_transfers.insert((*domain).to_string(),
                crate::upstream::structs::tracker_domain_stats::TrackerDomainStats {
                    uploaded: *uploaded,
                    downloaded: *downloaded,
                    total_size: *total_size,
                    count: *count,
                });
        }
        document
    }

    mod aggregate_tests {
        use super::summary;
        use crate::config::structs::tracker_alias_map::TrackerAliasMap;
        use crate::config::structs::trackers_config::TrackersConfig;
        use crate::ratio::structs::raw_aggregate::RawAggregate;

        #[test]
        fn test_aggregate_sums_domains_of_one_key() {
            let config = TrackersConfig::load(r#"
                [trackers.alpha]
                domains = ["a1.example", "a2.example"]
            "#).unwrap();
            let aliases = TrackerAliasMap::from(&config);
            let document = summary(&[
                ("a1.example", 100, 50, 1000, 2),
                ("a2.example", 30, 10, 500, 1),
            ]);

            let aggregates = RawAggregate::aggregate(&document, &aliases);
            assert_eq!(aggregates.len(), 1);
            let alpha = &aggregates["alpha"];
            assert_eq!(alpha.uploaded, 130);
            assert_eq!(alpha.downloaded, 60);
            assert_eq!(alpha.total_size, 1500);
            assert_eq!(alpha.count, 3);
            assert_eq!(alpha.domains, vec!["a1.example", "a2.example"]);
        }

        #[test]
        fn test_aggregate_unmapped_domain_is_its_own_key() {
            let aliases = TrackerAliasMap::default();
            let document = summary(&[("solo.example", 10, 20, 30, 1)]);

            let aggregates = RawAggregate::aggregate(&document, &aliases);
            let solo = &aggregates["solo.example"];
            assert_eq!(solo.uploaded, 10);
            assert_eq!(solo.downloaded, 20);
        }

        #[test]
        fn test_aggregate_empty_snapshot() {
            let aggregates = RawAggregate::aggregate(&super::TorrentsSummary::default(), &TrackerAliasMap::default());
            assert!(aggregates.is_empty());
        }
    }

    mod ratio_rule_tests {
        use crate::ratio::structs::tracker_ratio_row::TrackerRatioRow;

        #[test]
        fn test_ratio_nothing_moved_is_zero() {
            assert_eq!(TrackerRatioRow::ratio_of(0, 0), 0.0);
        }

        #[test]
        fn test_ratio_upload_only_is_infinite() {
            assert!(TrackerRatioRow::ratio_of(1, 0).is_infinite());
        }

        #[test]
        fn test_ratio_quotient() {
            assert_eq!(TrackerRatioRow::ratio_of(1000, 500), 2.0);
            assert_eq!(TrackerRatioRow::ratio_of(500, 1000), 0.5);
        }
    }

    mod compute_rows_tests {
        use std::collections::HashMap;
        use super::summary;
        use crate::config::structs::buffer_override::BufferOverride;
        use crate::config::structs::tracker_alias_map::TrackerAliasMap;
        use crate::config::structs::trackers_config::TrackersConfig;
        use crate::ratio::structs::tracker_ratio_row::TrackerRatioRow;

        #[test]
        fn test_compute_rows_plain_snapshot() {
            let document = summary(&[("a.example", 1000, 500, 0, 0)]);
            let rows = TrackerRatioRow::compute_rows(&document, &TrackerAliasMap::default(), &HashMap::new());

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].tracker, "a.example");
            assert_eq!(rows[0].key, "a.example");
            assert_eq!(rows[0].uploaded, 1000);
            assert_eq!(rows[0].downloaded, 500);
            assert_eq!(rows[0].ratio, 2.0);
            assert_eq!(rows[0].delta, 500);
        }

        #[test]
        fn test_compute_rows_applies_buffer_override() {
            let document = summary(&[("a.example", 1000, 500, 0, 0)]);
            let mut overrides = HashMap::new();
            overrides.insert(String::from("a.example"), BufferOverride { uploaded_add: 1000, downloaded_add: -200 });

            let rows = TrackerRatioRow::compute_rows(&document, &TrackerAliasMap::default(), &overrides);
            assert_eq!(rows[0].uploaded, 2000);
            assert_eq!(rows[0].downloaded, 300);
            assert_eq!(rows[0].delta, 1700);
        }

        #[test]
        fn test_compute_rows_negative_override_clamps_at_zero() {
            let document = summary(&[("a.example", 100, 100, 0, 0)]);
            let mut overrides = HashMap::new();
            overrides.insert(String::from("a.example"), BufferOverride { uploaded_add: -500, downloaded_add: 0 });

            let rows = TrackerRatioRow::compute_rows(&document, &TrackerAliasMap::default(), &overrides);
            assert_eq!(rows[0].uploaded, 0);
            assert_eq!(rows[0].ratio, 0.0, "0 uploaded over 100 downloaded");
            assert_eq!(rows[0].delta, -100);
        }

        #[test]
        fn test_compute_rows_display_name_used() {
            let config = TrackersConfig::load(r#"
                [trackers.alpha]
                display = "Alpha Tracker"
                domains = ["a.example"]
            "#).unwrap();
            let document = summary(&[("a.example", 1, 1, 0, 0)]);

            let rows = TrackerRatioRow::compute_rows(&document, &TrackerAliasMap::from(&config), &HashMap::new());
            assert_eq!(rows[0].tracker, "Alpha Tracker");
            assert_eq!(rows[0].key, "alpha");
        }

        #[test]
        fn test_rows_order_ascending_infinity_last() {
            let document = summary(&[
                ("two.example", 200, 100, 0, 0),
                ("inf.example", 10, 0, 0, 0),
                ("half.example", 50, 100, 0, 0),
                ("one.example", 100, 100, 0, 0),
            ]);
            let rows = TrackerRatioRow::compute_rows(&document, &TrackerAliasMap::default(), &HashMap::new());
            let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
            assert_eq!(keys, vec!["half.example", "one.example", "two.example", "inf.example"]);
        }

        #[test]
        fn test_infinite_ratio_serializes_as_null() {
            let document = summary(&[("inf.example", 10, 0, 0, 0)]);
            let rows = TrackerRatioRow::compute_rows(&document, &TrackerAliasMap::default(), &HashMap::new());
            let json = serde_json::to_value(&rows[0]).unwrap();
            assert!(json["ratio"].is_null());
        }
    }
}

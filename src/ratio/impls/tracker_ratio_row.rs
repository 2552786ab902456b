use std::collections::HashMap;
use crate::config::structs::buffer_override::BufferOverride;
use crate::config::structs::tracker_alias_map::TrackerAliasMap;
use crate::ratio::structs::raw_aggregate::RawAggregate;
use crate::ratio::structs::tracker_ratio_row::TrackerRatioRow;
use crate::upstream::structs::torrents_summary::TorrentsSummary;

impl TrackerRatioRow {
    /// Ratio rule for raw aggregates: with nothing downloaded the ratio is
    /// infinite if anything was uploaded, `0.0` if nothing moved at all.
    pub fn ratio_of(uploaded: u64, downloaded: u64) -> f64 {
        if downloaded == 0 {
            if uploaded > 0 { f64::INFINITY } else { 0.0 }
        } else {
            uploaded as f64 / downloaded as f64
        }
    }

    /// Builds the ordered ratio rows for one snapshot: aggregate by logical
    /// tracker, merge buffer overrides (clamped at zero), compute ratio and
    /// delta, sort.
    pub fn compute_rows(
        summary: &TorrentsSummary,
        aliases: &TrackerAliasMap,
        overrides: &HashMap<String, BufferOverride>,
    ) -> Vec<TrackerRatioRow> {
        let aggregates = RawAggregate::aggregate(summary, aliases);
        let mut rows: Vec<TrackerRatioRow> = Vec::with_capacity(aggregates.len());
        for (key, aggregate) in aggregates {
            let correction = match BufferOverride::lookup(overrides, &key, &aggregate.domains) {
                Some(value) => *value,
                None => BufferOverride::default()
            };
            let uploaded = aggregate.uploaded.saturating_add_signed(correction.uploaded_add);
            let downloaded = aggregate.downloaded.saturating_add_signed(correction.downloaded_add);
            rows.push(TrackerRatioRow {
                tracker: aliases.display_for(&key),
                ratio: Self::ratio_of(uploaded, downloaded),
                delta: uploaded as i64 - downloaded as i64,
                uploaded,
                downloaded,
                count: aggregate.count,
                total_size: aggregate.total_size,
                key,
            });
        }
        Self::sort_rows(&mut rows);
        rows
    }

    /// Ascending by ratio, infinity last, key as tiebreak for a stable total
    /// order regardless of map iteration.
    pub fn sort_rows(rows: &mut [TrackerRatioRow]) {
        rows.sort_by(|a, b| a.ratio.total_cmp(&b.ratio).then_with(|| a.key.cmp(&b.key)));
    }
}

use std::collections::BTreeMap;
use crate::config::structs::tracker_alias_map::TrackerAliasMap;
use crate::ratio::structs::raw_aggregate::RawAggregate;
use crate::upstream::structs::torrents_summary::TorrentsSummary;

impl RawAggregate {
    /// Groups the snapshot's per-domain counters by logical tracker key and
    /// sums them. Domains without an alias entry keep their own name as key,
    /// so every upstream tracker is represented even without configuration.
    pub fn aggregate(summary: &TorrentsSummary, aliases: &TrackerAliasMap) -> BTreeMap<String, RawAggregate> {
        let mut aggregates: BTreeMap<String, RawAggregate> = BTreeMap::new();
        for (domain, stats) in &summary.counts.tracker_transfers {
            let key = aliases.resolve_key(domain);
            let entry = aggregates.entry(key).or_default();
            entry.uploaded += stats.uploaded;
            entry.downloaded += stats.downloaded;
            entry.total_size += stats.total_size;
            entry.count += stats.count;
            entry.domains.push(domain.clone());
        }
        for aggregate in aggregates.values_mut() {
            aggregate.domains.sort();
        }
        aggregates
    }
}

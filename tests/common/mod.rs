#![allow(dead_code)]
use tempfile::TempDir;
use ratio_ledger::ledger::enums::reset_policy::ResetPolicy;
use ratio_ledger::ledger::structs::ratio_ledger::RatioLedger;
use ratio_ledger::store::structs::state_store::StateStore;
use ratio_ledger::upstream::structs::torrents_summary::TorrentsSummary;
use ratio_ledger::upstream::structs::tracker_domain_stats::TrackerDomainStats;

/// Builds a snapshot from `(domain, uploaded, downloaded)` triples.
pub fn create_test_summary(entries: &[(&str, u64, u64)]) -> TorrentsSummary {
    let mut summary = TorrentsSummary::default();
    for (domain, uploaded, downloaded) in entries {
        summary.counts.tracker_transfers.insert((*domain).to_string(), TrackerDomainStats {
            uploaded: *uploaded,
            downloaded: *downloaded,
            total_size: 0,
            count: 1,
        });
    }
    summary
}

/// A store backed by a fresh temp directory. Keep the `TempDir` alive for the
/// duration of the test.
pub fn create_test_store() -> (TempDir, StateStore) {
    let dir = TempDir::new().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    (dir, store)
}

pub fn create_test_ledger(dir: &TempDir) -> RatioLedger {
    RatioLedger::new(StateStore::new(dir.path().join("state.json")), ResetPolicy::lost_delta)
}

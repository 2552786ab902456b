use log::warn;
use crate::ledger::enums::reset_policy::ResetPolicy;
use crate::ledger::structs::ratio_ledger::RatioLedger;
use crate::ledger::structs::tracker_ledger_entry::TrackerLedgerEntry;
use crate::ratio::structs::tracker_ratio_row::TrackerRatioRow;
use crate::store::structs::state_store::StateStore;

impl RatioLedger {
    pub fn new(store: StateStore, policy: ResetPolicy) -> RatioLedger {
        RatioLedger { store, policy }
    }

    /// Ratio rule on ledger-corrected totals: anything over zero downloaded is
    /// infinite, including a fully idle tracker.
    pub fn ratio_of(uploaded: u64, downloaded: u64) -> f64 {
        if downloaded > 0 {
            uploaded as f64 / downloaded as f64
        } else {
            f64::INFINITY
        }
    }

    /// Runs one load-mutate-save ledger cycle over the computed rows and
    /// returns them with compensated totals, recomputed ratio and delta, and
    /// the final ordering re-imposed.
    ///
    /// A failed save is logged and the corrected rows still returned; the next
    /// cycle re-detects whatever this one could not record.
    pub fn apply(&self, mut rows: Vec<TrackerRatioRow>) -> Vec<TrackerRatioRow> {
        let mut state = self.store.load();

        for row in rows.iter_mut() {
            let entry = state.trackers
                .entry(row.key.clone())
                .or_insert_with(|| TrackerLedgerEntry::baseline(row.uploaded, row.downloaded));

            let (uploaded, downloaded) = entry.observe(row.uploaded, row.downloaded, self.policy);
            row.uploaded = uploaded;
            row.downloaded = downloaded;
            row.ratio = Self::ratio_of(uploaded, downloaded);
            row.delta = uploaded as i64 - downloaded as i64;
        }

        if let Err(e) = self.store.save(&state) {
            warn!("ledger state save failed, corrections not recorded this cycle: {}", e);
        }

        TrackerRatioRow::sort_rows(&mut rows);
        rows
    }
}

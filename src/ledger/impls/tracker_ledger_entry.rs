use crate::ledger::enums::reset_policy::ResetPolicy;
use crate::ledger::structs::tracker_ledger_entry::TrackerLedgerEntry;

impl TrackerLedgerEntry {
    /// First observation of a key: previous values become the baseline, no
    /// correction is applied this cycle.
    pub fn baseline(uploaded: u64, downloaded: u64) -> TrackerLedgerEntry {
        TrackerLedgerEntry {
            prev_uploaded: uploaded,
            prev_downloaded: downloaded,
            buffer_uploaded: 0,
            buffer_downloaded: 0,
        }
    }

    /// One poll transition. Each counter is checked independently: a decrease
    /// grows its buffer per the policy, previous values update unconditionally,
    /// and the compensated pair `current + buffer` is returned.
    pub fn observe(&mut self, uploaded: u64, downloaded: u64, policy: ResetPolicy) -> (u64, u64) {
        if uploaded < self.prev_uploaded {
            self.buffer_uploaded += Self::carry(self.prev_uploaded, uploaded, policy);
        }
        if downloaded < self.prev_downloaded {
            self.buffer_downloaded += Self::carry(self.prev_downloaded, downloaded, policy);
        }

        self.prev_uploaded = uploaded;
        self.prev_downloaded = downloaded;

        (
            uploaded.saturating_add(self.buffer_uploaded),
            downloaded.saturating_add(self.buffer_downloaded),
        )
    }

    fn carry(previous: u64, current: u64, policy: ResetPolicy) -> u64 {
        match policy {
            ResetPolicy::lost_delta => previous - current,
            ResetPolicy::full_previous => previous,
        }
    }
}

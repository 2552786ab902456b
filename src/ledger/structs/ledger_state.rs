use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::ledger::structs::tracker_ledger_entry::TrackerLedgerEntry;

/// Durable root of the ledger. Entries are created lazily on first observation
/// of a key and never deleted automatically; a tracker disappearing upstream
/// leaves a stale but harmless entry.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerState {
    #[serde(default)]
    pub trackers: BTreeMap<String, TrackerLedgerEntry>,
}

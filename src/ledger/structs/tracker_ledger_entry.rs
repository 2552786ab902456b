use serde::{Deserialize, Serialize};

/// Previous observed counters and accumulated carry-buffers for one logical
/// tracker key. Buffers are monotonically non-decreasing for the lifetime of
/// the entry. Wire names match the state document on disk.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackerLedgerEntry {
    #[serde(rename = "prev_u", default)]
    pub prev_uploaded: u64,
    #[serde(rename = "prev_d", default)]
    pub prev_downloaded: u64,
    #[serde(rename = "buf_u", default)]
    pub buffer_uploaded: u64,
    #[serde(rename = "buf_d", default)]
    pub buffer_downloaded: u64,
}

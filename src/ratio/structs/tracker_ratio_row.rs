use serde::{Deserialize, Serialize};

/// One row of the ratio table, produced fresh per request. An infinite ratio
/// serializes as JSON `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerRatioRow {
    pub tracker: String,
    pub key: String,
    pub uploaded: u64,
    pub downloaded: u64,
    pub ratio: f64,
    pub delta: i64,
    pub count: u32,
    pub total_size: u64,
}

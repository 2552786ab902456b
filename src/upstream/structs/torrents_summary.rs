use serde::{Deserialize, Serialize};
use crate::upstream::structs::transfer_counts::TransferCounts;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TorrentsSummary {
    #[serde(default)]
    pub counts: TransferCounts,
}

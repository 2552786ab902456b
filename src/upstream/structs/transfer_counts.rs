use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::upstream::structs::tracker_domain_stats::TrackerDomainStats;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TransferCounts {
    #[serde(default, rename = "trackerTransfers")]
    pub tracker_transfers: HashMap<String, TrackerDomainStats>,
}

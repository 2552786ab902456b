use serde::{Deserialize, Serialize};
use crate::config::structs::ledger_config::LedgerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub trackers_path: String,
    pub buffers_path: String,
    pub ledger: LedgerConfig,
}

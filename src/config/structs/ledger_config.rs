use serde::{Deserialize, Serialize};
use crate::ledger::enums::reset_policy::ResetPolicy;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LedgerConfig {
    pub enabled: bool,
    pub state_path: String,
    pub reset_policy: ResetPolicy,
}

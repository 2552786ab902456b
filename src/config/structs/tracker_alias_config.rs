use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TrackerAliasConfig {
    /// Human label for the tracker; the logical key itself when absent.
    #[serde(default)]
    pub display: Option<String>,
    /// Physical domains that roll up into this logical tracker.
    #[serde(default)]
    pub domains: Vec<String>,
}

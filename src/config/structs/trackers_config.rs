use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::structs::tracker_alias_config::TrackerAliasConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TrackersConfig {
    #[serde(default)]
    pub trackers: BTreeMap<String, TrackerAliasConfig>,
}

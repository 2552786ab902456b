use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::config::structs::buffer_override_config::BufferOverrideConfig;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BuffersConfig {
    #[serde(default)]
    pub buffers: BTreeMap<String, BufferOverrideConfig>,
}

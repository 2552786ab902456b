use std::collections::HashMap;
use log::{debug, warn};
use crate::config::structs::buffer_override::BufferOverride;
use crate::config::structs::buffers_config::BuffersConfig;

impl BuffersConfig {
    pub fn load(data: &str) -> Result<BuffersConfig, toml::de::Error> {
        toml::from_str(data)
    }

    /// Loads the buffer override table; missing or unparseable files yield the
    /// empty table.
    pub fn load_file(path: &str) -> BuffersConfig {
        match std::fs::read_to_string(path) {
            Err(_) => {
                debug!("no buffer override file at {}", path);
                BuffersConfig::default()
            }
            Ok(data) => match Self::load(&data) {
                Ok(config) => config,
                Err(e) => {
                    warn!("ignoring buffer override file {}: {}", path, e);
                    BuffersConfig::default()
                }
            }
        }
    }

    /// Resolves every entry's byte quantities through the permissive parser.
    pub fn overrides(&self) -> HashMap<String, BufferOverride> {
        self.buffers
            .iter()
            .map(|(key, entry)| {
                (key.clone(), BufferOverride {
                    uploaded_add: entry.uploaded_add.as_bytes(),
                    downloaded_add: entry.downloaded_add.as_bytes(),
                })
            })
            .collect()
    }
}

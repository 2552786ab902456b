use log::{debug, warn};
use crate::config::structs::trackers_config::TrackersConfig;

impl TrackersConfig {
    pub fn load(data: &str) -> Result<TrackersConfig, toml::de::Error> {
        toml::from_str(data)
    }

    /// Loads the tracker alias table. A missing or unparseable file yields the
    /// empty table; unaliased domains then fall back to their own name.
    pub fn load_file(path: &str) -> TrackersConfig {
        match std::fs::read_to_string(path) {
            Err(_) => {
                debug!("no tracker alias file at {}", path);
                TrackersConfig::default()
            }
            Ok(data) => match Self::load(&data) {
                Ok(config) => config,
                Err(e) => {
                    warn!("ignoring tracker alias file {}: {}", path, e);
                    TrackersConfig::default()
                }
            }
        }
    }
}

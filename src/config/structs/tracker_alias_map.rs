use std::collections::HashMap;

/// Lookup maps derived from [`TrackersConfig`](crate::config::structs::trackers_config::TrackersConfig),
/// immutable for the duration of one request.
#[derive(Debug, Clone, Default)]
pub struct TrackerAliasMap {
    pub domain_to_key: HashMap<String, String>,
    pub key_to_display: HashMap<String, String>,
}

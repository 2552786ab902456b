use std::collections::HashMap;
use crate::config::structs::tracker_alias_map::TrackerAliasMap;
use crate::config::structs::trackers_config::TrackersConfig;

impl From<&TrackersConfig> for TrackerAliasMap {
    fn from(config: &TrackersConfig) -> TrackerAliasMap {
        let mut domain_to_key: HashMap<String, String> = HashMap::new();
        let mut key_to_display: HashMap<String, String> = HashMap::new();
        for (key, alias) in &config.trackers {
            let display = alias.display.clone().unwrap_or_else(|| key.clone());
            key_to_display.insert(key.clone(), display);
            for domain in &alias.domains {
                // a domain claimed twice goes to the last entry in table order
                domain_to_key.insert(domain.clone(), key.clone());
            }
        }
        TrackerAliasMap { domain_to_key, key_to_display }
    }
}

impl TrackerAliasMap {
    /// Logical key for a physical domain; unmapped domains are their own key.
    pub fn resolve_key(&self, domain: &str) -> String {
        match self.domain_to_key.get(domain) {
            Some(key) => key.clone(),
            None => domain.to_string()
        }
    }

    pub fn display_for(&self, key: &str) -> String {
        match self.key_to_display.get(key) {
            Some(display) => display.clone(),
            None => key.to_string()
        }
    }
}

use std::collections::HashMap;
use crate::config::structs::buffer_override::BufferOverride;

impl BufferOverride {
    /// Overrides key by logical tracker key. An entry keyed by a raw member
    /// domain is honored as a compatibility shim when no key-level entry exists.
    pub fn lookup<'a>(
        overrides: &'a HashMap<String, BufferOverride>,
        key: &str,
        domains: &[String],
    ) -> Option<&'a BufferOverride> {
        match overrides.get(key) {
            Some(value) => Some(value),
            None => domains.iter().find_map(|domain| overrides.get(domain))
        }
    }
}

//! Implementation blocks for configuration loading/saving.

pub mod buffer_override;
pub mod buffers_config;
pub mod configuration;
pub mod configuration_error;
pub mod tracker_alias_map;
pub mod trackers_config;

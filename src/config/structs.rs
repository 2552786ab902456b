//! Configuration data structures.
//!
//! This module contains all the struct definitions for configuration options.
//! Each struct corresponds to a section in a TOML configuration file.

/// Root configuration structure containing all runtime settings.
pub mod configuration;

/// Ledger settings (enabled flag, state location, reset policy).
pub mod ledger_config;

/// Tracker alias table as written in trackers.toml.
pub mod trackers_config;

/// One tracker alias entry (display name, member domains).
pub mod tracker_alias_config;

/// Lookup maps derived from the tracker alias table.
pub mod tracker_alias_map;

/// Buffer override table as written in buffers.toml.
pub mod buffers_config;

/// One buffer override entry in configuration form.
pub mod buffer_override_config;

/// One buffer override resolved to byte counts.
pub mod buffer_override;

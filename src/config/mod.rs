//! Configuration management module.
//!
//! This module handles loading, parsing, and validating configuration from
//! TOML files. Three sources exist:
//!
//! - **config.toml**: runtime settings (log level, file locations, ledger mode)
//! - **trackers.toml**: the tracker alias table grouping mirror domains under
//!   one logical key with a display name
//! - **buffers.toml**: static per-tracker byte corrections for history the
//!   counter source cannot see
//!
//! The runtime configuration loads strictly (a broken `config.toml` is refused,
//! optionally regenerated with `--create-config`). The two declarative sources
//! load softly: a missing or unparseable file degrades to an empty table, and
//! absent fields take their defaults, so one bad entry never takes down the
//! statistics path.
//!
//! # Example
//!
//! ```rust,ignore
//! use ratio_ledger::config::structs::configuration::Configuration;
//!
//! // Load configuration from file
//! let config = Configuration::load_from_file(false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

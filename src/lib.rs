//! # Ratio-Ledger
//!
//! A reset-compensating upload/download ratio statistics engine for torrent trackers.
//!
//! ## Overview
//!
//! Ratio-Ledger consumes a torrent client's transfer snapshot (the per-tracker
//! upload/download counters it reports), groups the raw per-domain counters into
//! logical tracker identities, applies manual buffer corrections, and maintains a
//! persistent ledger that detects upstream counter resets so the cumulative totals
//! it reports never regress.
//!
//! ## Features
//!
//! - **Alias Grouping**: multiple mirror domains of one tracker roll up into a
//!   single logical identity with a configurable display name
//! - **Buffer Overrides**: static per-tracker corrections for historical credit the
//!   counter source cannot see, accepted as raw numbers or strings like `"10GiB"`
//! - **Reset Detection**: per-counter decrease detection with a carry-buffer, so a
//!   client migration or tracker re-add never shrinks the reported totals
//! - **Durable State**: the ledger survives restarts as a small JSON document with
//!   a lock-guarded write path
//! - **Soft Failure**: missing or malformed configuration degrades to empty
//!   defaults; only a rejected snapshot document is a hard error
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ratio_ledger::config::structs::tracker_alias_map::TrackerAliasMap;
//! use ratio_ledger::ratio::structs::tracker_ratio_row::TrackerRatioRow;
//! use ratio_ledger::upstream::structs::torrents_summary::TorrentsSummary;
//!
//! let summary = TorrentsSummary::from_slice(&snapshot_bytes)?;
//! let rows = TrackerRatioRow::compute_rows(&summary, &aliases, &overrides);
//! let rows = ledger.apply(rows);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Byte-quantity parsing/formatting, error type, logging setup
//! - [`config`] - TOML configuration, tracker aliases, buffer overrides
//! - [`upstream`] - Typed snapshot document parsed from the client's JSON
//! - [`ratio`] - Aggregation by logical tracker and ratio/ordering computation
//! - [`ledger`] - The reset-compensating persistent counter state machine
//! - [`store`] - Durable load/save of ledger state

/// Common utilities and shared functionality.
///
/// Contains the byte-quantity parser and formatter, the crate's simple error
/// type, and logging setup used by the binary.
pub mod common;

/// Configuration management module.
///
/// Handles the runtime `config.toml` plus the two declarative sources: the
/// tracker alias table and the buffer override table.
pub mod config;

/// Reset-compensating ledger module.
///
/// Converts raw counters that may decrease between observations into cumulative
/// totals that never regress, by carrying the lost amount in a per-tracker buffer.
pub mod ledger;

/// Aggregation and ratio computation module.
///
/// Groups raw per-domain counters into logical trackers, merges buffer
/// corrections, and computes the ordered ratio rows.
pub mod ratio;

/// Persistence adapter for the ledger state document.
pub mod store;

/// CLI argument parsing structures.
pub mod structs;

/// Typed upstream snapshot structures.
pub mod upstream;
